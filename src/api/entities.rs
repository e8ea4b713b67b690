//! Generic authenticated entity access.

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

use super::ApiClient;

impl ApiClient {
    /// Fetches a single entity. A `null` or empty body yields `None`.
    pub async fn fetch_one<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        debug!("Fetching entity at: {url}");
        let request = self.with_auth_headers(self.client.get(url));
        let body = self.send_text(request, "Fetch entity").await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches a collection. A `null` or empty body yields an empty list.
    pub async fn fetch_all<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        debug!("Fetching collection at: {url}");
        let request = self.with_auth_headers(self.client.get(url));
        let body = self.send_text(request, "Fetch collection").await?;

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Option<Vec<T>> = serde_json::from_str(&body)?;
        let items = items.unwrap_or_default();
        debug!("Fetched {} items from {url}", items.len());
        Ok(items)
    }

    pub async fn create_entity<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        info!("Creating entity at: {url}");
        let request = self.with_auth_headers(self.client.post(url)).json(body);
        self.send_json(request, "Create entity").await
    }

    pub async fn update_entity<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        info!("Updating entity at: {url}");
        let request = self.with_auth_headers(self.client.put(url)).json(body);
        self.send_json(request, "Update entity").await
    }

    pub async fn delete_entity(&self, url: &str) -> Result<()> {
        info!("Deleting entity at: {url}");
        let request = self.with_auth_headers(self.client.delete(url));
        self.send_text(request, "Delete entity").await?;
        Ok(())
    }
}
