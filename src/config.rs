//! Client configuration (backend base URIs and storage bucket).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Default Firebase Storage REST endpoint.
pub const DEFAULT_STORAGE_BASE_URI: &str = "https://firebasestorage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(default = "default_storage_base_uri")]
    pub base_uri: String,
    pub bucket: String,
}

fn default_storage_base_uri() -> String {
    DEFAULT_STORAGE_BASE_URI.to_string()
}

/// Endpoints the client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URI of the build (catalog/authoring) API
    pub build_base_uri: String,
    /// Base URI of the workouts API (sign-in, public pages, media)
    pub workouts_base_uri: String,
    pub storage: StorageConfig,
}

impl ClientConfig {
    /// Builds a config from explicit URIs, trimming trailing slashes.
    pub fn new(
        build_base_uri: impl Into<String>,
        workouts_base_uri: impl Into<String>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            build_base_uri: trim_base(build_base_uri.into()),
            workouts_base_uri: trim_base(workouts_base_uri.into()),
            storage: StorageConfig {
                base_uri: trim_base(storage.base_uri),
                bucket: storage.bucket,
            },
        }
    }

    /// Reads the config from `SUPERFIT_*` environment variables.
    ///
    /// `SUPERFIT_STORAGE_BASE_URI` is optional and falls back to
    /// [`DEFAULT_STORAGE_BASE_URI`].
    pub fn from_env() -> Result<Self> {
        let build = required_var("SUPERFIT_BUILD_BASE_URI")?;
        let workouts = required_var("SUPERFIT_WORKOUTS_BASE_URI")?;
        let bucket = required_var("SUPERFIT_STORAGE_BUCKET")?;
        let storage_base = std::env::var("SUPERFIT_STORAGE_BASE_URI")
            .unwrap_or_else(|_| default_storage_base_uri());

        let config = Self::new(
            build,
            workouts,
            StorageConfig {
                base_uri: storage_base,
                bucket,
            },
        );
        config.validate()?;
        info!(
            "Loaded client config (build: {}, workouts: {})",
            config.build_base_uri, config.workouts_base_uri
        );
        Ok(config)
    }

    /// Checks that every base URI is a valid URL and a bucket is set.
    pub fn validate(&self) -> Result<()> {
        for (name, uri) in [
            ("build base URI", &self.build_base_uri),
            ("workouts base URI", &self.workouts_base_uri),
            ("storage base URI", &self.storage.base_uri),
        ] {
            reqwest::Url::parse(uri)
                .map_err(|e| ClientError::Config(format!("Invalid {name} '{uri}': {e}")))?;
            debug!("Validated {name}: {uri}");
        }

        if self.storage.bucket.trim().is_empty() {
            return Err(ClientError::Config("Storage bucket is empty".to_string()));
        }

        Ok(())
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| ClientError::Config(format!("{name} is not set")))
}

fn trim_base(uri: String) -> String {
    uri.trim_end_matches('/').to_string()
}
