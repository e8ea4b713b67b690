//! Superfit client data access
//!
//! This library fetches catalog and profile resources from the Superfit backend
//! and serves photo/video lookups through a session cache. Thumbnail URLs are
//! resolved from object storage.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod media;
pub mod models;
pub mod storage;

pub use api::ApiClient;
pub use auth::{CredentialProvider, NoCredentials, SessionToken};
pub use cache::{EvictionPolicy, MediaCache, SessionCache};
pub use config::{ClientConfig, StorageConfig};
pub use error::{ClientError, Result};
pub use media::{MediaFetcher, ThumbnailSize};
pub use storage::{FirebaseStorage, ObjectStorage};
