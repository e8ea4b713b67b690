//! Photo and video batch endpoints.

use log::debug;

use crate::error::Result;
use crate::models::{Photo, Video};

use super::ApiClient;

const MEDIA_API_VERSION: u32 = 1;

impl ApiClient {
    /// Fetches every photo named in `ids` in a single request.
    pub async fn fetch_photos<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Photo>> {
        let url = format!("{}/photos", self.images_base_url(MEDIA_API_VERSION));
        self.fetch_media(&url, ids, "Fetch photos").await
    }

    /// Fetches every video named in `ids` in a single request.
    pub async fn fetch_videos<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Video>> {
        let url = format!("{}/videos", self.images_base_url(MEDIA_API_VERSION));
        self.fetch_media(&url, ids, "Fetch videos").await
    }

    /// `ids` goes out as a repeated query parameter (`ids=a&ids=b`).
    async fn fetch_media<S, T>(&self, url: &str, ids: &[S], what: &str) -> Result<Vec<T>>
    where
        S: AsRef<str>,
        T: serde::de::DeserializeOwned,
    {
        debug!("{what}: {} ids from {url}", ids.len());
        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("ids", id.as_ref())).collect();

        let request = self.with_auth_headers(self.client.get(url)).query(&query);
        let items: Option<Vec<T>> = self.send_json(request, what).await?;
        Ok(items.unwrap_or_default())
    }
}
