//! Unit tests for the media fetcher.


use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::auth::SessionToken;
use crate::config::{ClientConfig, StorageConfig};
use crate::error::{ClientError, Result};
use crate::media::MediaFetcher;
use crate::storage::ObjectStorage;

/// Storage fake that records every path it is asked to resolve.
#[derive(Default)]
pub(super) struct RecordingStorage {
    pub(super) requested: Mutex<Vec<String>>,
    pub(super) missing: bool,
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn download_url(&self, path: &str) -> Result<String> {
        self.requested.lock().unwrap().push(path.to_string());
        if self.missing {
            return Err(ClientError::ObjectNotFound(path.to_string()));
        }
        Ok(format!("https://cdn.example.com/{path}?token=t"))
    }
}

pub(super) fn api_with_mock(mock_uri: &str) -> Arc<ApiClient> {
    let config = ClientConfig::new(
        mock_uri,
        mock_uri,
        StorageConfig {
            base_uri: mock_uri.to_string(),
            bucket: "test-bucket".to_string(),
        },
    );
    Arc::new(ApiClient::new(&config, Arc::new(SessionToken::new("test_token"))))
}

pub(super) fn fetcher_with_mock(mock_uri: &str) -> (MediaFetcher, Arc<RecordingStorage>) {
    let storage = Arc::new(RecordingStorage::default());
    let fetcher = MediaFetcher::new(api_with_mock(mock_uri), storage.clone());
    (fetcher, storage)
}
