//! Error types for superfit_client

use reqwest::StatusCode;

/// Unified error type for API, storage and media operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// File path handed to thumbnail resolution has no file name
    #[error("Invalid file path: '{0}'")]
    InvalidPath(String),
    /// Thumbnail width outside the pre-rendered set
    #[error("Unsupported thumbnail size: {0}")]
    UnsupportedThumbnailSize(u32),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Backend answered with a non-success status
    #[error("HTTP error: {status} - {body}")]
    HttpStatus { status: StatusCode, body: String },
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Object storage has no object at the given path
    #[error("Object not found in storage: {0}")]
    ObjectNotFound(String),
    /// Missing or malformed client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for superfit_client operations
pub type Result<T> = std::result::Result<T, ClientError>;
