//! Request authentication and response handling shared by every endpoint.

use log::{debug, error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::auth::bearer_value;
use crate::error::{ClientError, Result};

use super::ApiClient;

impl ApiClient {
    /// Attaches the JSON content type and the session bearer token.
    ///
    /// Without a token the `Authorization` header is sent empty, which the
    /// backend treats as unauthenticated.
    pub(crate) fn with_auth_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, bearer_value(self.credentials.as_ref()))
    }

    /// Sends the request and returns the body of a successful response.
    pub(crate) async fn send_text(&self, request: RequestBuilder, what: &str) -> Result<String> {
        let body = self.send_quiet(request, what).await?;
        debug!("{what} response body: {body}");
        Ok(body)
    }

    /// Like [`Self::send_text`], but never logs the response body.
    ///
    /// Used for responses carrying session credentials.
    pub(crate) async fn send_quiet(&self, request: RequestBuilder, what: &str) -> Result<String> {
        let response = request.send().await.map_err(|e| {
            error!("{what} request failed: {e}");
            ClientError::Network(e)
        })?;

        let status = response.status();
        debug!("{what} response status: {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{what} failed with status {status}: {body}");
            return Err(ClientError::HttpStatus { status, body });
        }

        Ok(response.text().await?)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let body = self.send_text(request, what).await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse {what} response: {e}");
            ClientError::Parse(e)
        })
    }
}
