//! Object storage backend used to resolve download URLs for stored media.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::auth::{bearer_value, CredentialProvider};
use crate::config::StorageConfig;
use crate::error::{ClientError, Result};

/// Resolves storage paths to downloadable URLs.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Returns a download URL for the object at `path`.
    ///
    /// Fails with [`ClientError::ObjectNotFound`] when nothing is stored there.
    async fn download_url(&self, path: &str) -> Result<String>;
}

/// Object metadata as returned by the Firebase Storage REST API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectMetadata {
    #[serde(default)]
    download_tokens: Option<String>,
}

impl ObjectMetadata {
    fn first_token(&self) -> Option<&str> {
        self.download_tokens
            .as_deref()?
            .split(',')
            .map(str::trim)
            .find(|token| !token.is_empty())
    }
}

/// Firebase Storage over its REST API.
pub struct FirebaseStorage {
    client: Client,
    base_uri: String,
    bucket: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl FirebaseStorage {
    pub fn new(config: &StorageConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        info!("Creating storage client for bucket {}", config.bucket);
        Self {
            client: Client::new(),
            base_uri: config.base_uri.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            credentials,
        }
    }

    /// Object URL for `path`; the whole path is a single encoded segment.
    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/v0/b/{}/o/{}",
            self.base_uri,
            self.bucket,
            urlencoding::encode(path)
        )
    }
}

#[async_trait]
impl ObjectStorage for FirebaseStorage {
    async fn download_url(&self, path: &str) -> Result<String> {
        let url = self.object_url(path);
        debug!("Resolving download URL for '{path}' at: {url}");

        let mut request = self.client.get(&url);
        let bearer = bearer_value(self.credentials.as_ref());
        if !bearer.is_empty() {
            request = request.header(AUTHORIZATION, bearer);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Storage metadata response status: {status}");

        if status == StatusCode::NOT_FOUND {
            warn!("No object stored at '{path}'");
            return Err(ClientError::ObjectNotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Storage lookup for '{path}' failed with status {status}: {body}");
            return Err(ClientError::HttpStatus { status, body });
        }

        let body = response.text().await?;
        let metadata: ObjectMetadata = serde_json::from_str(&body)?;

        let Some(token) = metadata.first_token() else {
            warn!("Object '{path}' has no download token");
            return Err(ClientError::ObjectNotFound(path.to_string()));
        };

        Ok(format!(
            "{url}?alt=media&token={}",
            urlencoding::encode(token)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{NoCredentials, SessionToken};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn storage_with_mock(mock_uri: &str, credentials: Arc<dyn CredentialProvider>) -> FirebaseStorage {
        FirebaseStorage::new(
            &StorageConfig {
                base_uri: mock_uri.to_string(),
                bucket: "superfit-media".to_string(),
            },
            credentials,
        )
    }

    #[test]
    fn object_url_encodes_whole_path() {
        let storage = storage_with_mock("https://storage.example.com", Arc::new(NoCredentials));
        assert_eq!(
            storage.object_url("users/u1/thumb@64_pic.png"),
            "https://storage.example.com/v0/b/superfit-media/o/users%2Fu1%2Fthumb%4064_pic.png"
        );
    }

    #[test]
    fn first_token_skips_blanks() {
        let metadata = ObjectMetadata {
            download_tokens: Some(" ,tok-1,tok-2".to_string()),
        };
        assert_eq!(metadata.first_token(), Some("tok-1"));

        let empty = ObjectMetadata {
            download_tokens: None,
        };
        assert_eq!(empty.first_token(), None);
    }

    #[tokio::test]
    async fn download_url_uses_first_token() {
        let mock_server = MockServer::start().await;
        let storage = storage_with_mock(&mock_server.uri(), Arc::new(SessionToken::new("tkn")));

        Mock::given(method("GET"))
            .and(path("/v0/b/superfit-media/o/users%2Fu1%2Fpic.png"))
            .and(header("Authorization", "Bearer tkn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "users/u1/pic.png",
                "bucket": "superfit-media",
                "downloadTokens": "abc-123,def-456"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = storage.download_url("users/u1/pic.png").await.unwrap();
        assert_eq!(
            url,
            format!(
                "{}/v0/b/superfit-media/o/users%2Fu1%2Fpic.png?alt=media&token=abc-123",
                mock_server.uri()
            )
        );
    }

    #[tokio::test]
    async fn download_token_is_query_encoded() {
        let mock_server = MockServer::start().await;
        let storage = storage_with_mock(&mock_server.uri(), Arc::new(NoCredentials));

        Mock::given(method("GET"))
            .and(path("/v0/b/superfit-media/o/pic.png"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "downloadTokens": "a+b=c&d"
            })))
            .mount(&mock_server)
            .await;

        let url = storage.download_url("pic.png").await.unwrap();
        assert!(url.ends_with("?alt=media&token=a%2Bb%3Dc%26d"), "got {url}");

        let parsed = reqwest::Url::parse(&url).unwrap();
        let token = parsed
            .query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned());
        assert_eq!(token.as_deref(), Some("a+b=c&d"));
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let mock_server = MockServer::start().await;
        let storage = storage_with_mock(&mock_server.uri(), Arc::new(NoCredentials));

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": { "code": 404, "message": "Not Found." }
            })))
            .mount(&mock_server)
            .await;

        let err = storage.download_url("users/u1/gone.png").await.unwrap_err();
        assert!(matches!(err, ClientError::ObjectNotFound(p) if p == "users/u1/gone.png"));
    }

    #[tokio::test]
    async fn metadata_without_tokens_is_not_found() {
        let mock_server = MockServer::start().await;
        let storage = storage_with_mock(&mock_server.uri(), Arc::new(NoCredentials));

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "pic.png"
            })))
            .mount(&mock_server)
            .await;

        let err = storage.download_url("pic.png").await.unwrap_err();
        assert!(matches!(err, ClientError::ObjectNotFound(_)));
    }

    #[tokio::test]
    async fn backend_failure_propagates_status() {
        let mock_server = MockServer::start().await;
        let storage = storage_with_mock(&mock_server.uri(), Arc::new(NoCredentials));

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let err = storage.download_url("pic.png").await.unwrap_err();
        assert!(matches!(err, ClientError::HttpStatus { status, .. } if status.as_u16() == 503));
    }
}
