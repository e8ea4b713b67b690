//! Superfit backend API client.
//!
//! This module issues authenticated requests against the build and workouts
//! APIs: catalog collections, athlete/plan public pages, sign-in, the media
//! batch endpoints and generic entity create/update/delete.

mod catalog;
mod client;
mod entities;
mod media;
mod profiles;
mod urls;

use std::sync::Arc;

use reqwest::Client;

use crate::auth::CredentialProvider;
use crate::config::ClientConfig;

pub use profiles::DEFAULT_PLANS_PAGE_SIZE;

/// Superfit API client for catalog, profile and media resources.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) build_base_uri: String,
    pub(crate) workouts_base_uri: String,
    pub(crate) credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    /// Creates a new API client for the configured backends.
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        log::info!("Creating Superfit API client");
        log::debug!(
            "Build API: {}, workouts API: {}",
            config.build_base_uri,
            config.workouts_base_uri
        );
        Self {
            client: Client::new(),
            build_base_uri: config.build_base_uri.clone(),
            workouts_base_uri: config.workouts_base_uri.clone(),
            credentials,
        }
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
