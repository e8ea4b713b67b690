//! Unit tests for the Superfit API module.


use std::sync::Arc;

use crate::api::ApiClient;
use crate::auth::{CredentialProvider, NoCredentials, SessionToken};
use crate::config::{ClientConfig, StorageConfig};

fn config_for(uri: &str) -> ClientConfig {
    ClientConfig::new(
        uri,
        uri,
        StorageConfig {
            base_uri: uri.to_string(),
            bucket: "test-bucket".to_string(),
        },
    )
}

/// Client pointing both backends at the mock server, authenticated with `test_token`.
pub(super) fn api_with_mock(mock_uri: &str) -> ApiClient {
    let credentials: Arc<dyn CredentialProvider> = Arc::new(SessionToken::new("test_token"));
    ApiClient::new(&config_for(mock_uri), credentials)
}

pub(super) fn anonymous_api_with_mock(mock_uri: &str) -> ApiClient {
    ApiClient::new(&config_for(mock_uri), Arc::new(NoCredentials))
}
