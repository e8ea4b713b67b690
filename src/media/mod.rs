//! Cached photo/video lookups and thumbnail URL resolution.
//!
//! Single-item lookups are served from a per-kind [`MediaCache`]; a miss
//! issues one batch request for that identifier and caches everything the
//! backend returns.

mod thumbnails;

use std::sync::Arc;

use log::{debug, info};

use crate::api::ApiClient;
use crate::cache::{MediaCache, SessionCache};
use crate::error::Result;
use crate::models::{Athlete, Identified, Photo, Video};
use crate::storage::ObjectStorage;

pub use thumbnails::{thumbnail_path, ThumbnailSize};

/// Photo/video fetcher with session caches and thumbnail resolution.
pub struct MediaFetcher {
    pub(crate) api: Arc<ApiClient>,
    pub(crate) storage: Arc<dyn ObjectStorage>,
    pub(crate) photos: Arc<dyn MediaCache<Photo>>,
    pub(crate) videos: Arc<dyn MediaCache<Video>>,
}

impl MediaFetcher {
    /// Creates a fetcher with empty, never-evicting session caches.
    pub fn new(api: Arc<ApiClient>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self::with_caches(
            api,
            storage,
            Arc::new(SessionCache::<Photo>::default()),
            Arc::new(SessionCache::<Video>::default()),
        )
    }

    pub fn with_caches(
        api: Arc<ApiClient>,
        storage: Arc<dyn ObjectStorage>,
        photos: Arc<dyn MediaCache<Photo>>,
        videos: Arc<dyn MediaCache<Video>>,
    ) -> Self {
        Self {
            api,
            storage,
            photos,
            videos,
        }
    }

    /// Storage path for a file uploaded by `user`.
    pub fn create_user_image_file_path(&self, user: &Athlete, file_name: &str) -> String {
        format!("users/{}/{}", user.user_id, file_name)
    }

    /// Returns the photo with `id`, fetching it on a cache miss.
    ///
    /// `Ok(None)` means the backend does not know the identifier.
    pub async fn get_photo(&self, id: &str) -> Result<Option<Photo>> {
        if let Some(photo) = self.photos.get(id).await {
            info!("Photo cache hit for {id}");
            return Ok(Some(photo));
        }

        info!("Photo cache miss for {id}, fetching from API");
        let photos = self.fetch_and_cache_photos(&[id]).await?;
        Ok(photos.into_iter().next())
    }

    /// Returns the video with `id`, fetching it on a cache miss.
    pub async fn get_video(&self, id: &str) -> Result<Option<Video>> {
        if let Some(video) = self.videos.get(id).await {
            info!("Video cache hit for {id}");
            return Ok(Some(video));
        }

        info!("Video cache miss for {id}, fetching from API");
        let videos = self.fetch_and_cache_videos(&[id]).await?;
        Ok(videos.into_iter().next())
    }

    pub(crate) async fn fetch_and_cache_photos(&self, ids: &[&str]) -> Result<Vec<Photo>> {
        let photos = self.api.fetch_photos(ids).await?;
        store_all(self.photos.as_ref(), &photos).await;
        Ok(photos)
    }

    pub(crate) async fn fetch_and_cache_videos(&self, ids: &[&str]) -> Result<Vec<Video>> {
        let videos = self.api.fetch_videos(ids).await?;
        store_all(self.videos.as_ref(), &videos).await;
        Ok(videos)
    }

    /// Download URL of the `size` thumbnail rendered next to `file_path`.
    ///
    /// Invalid paths fail before storage is contacted; storage errors are
    /// returned unchanged.
    pub async fn fetch_thumbnail_url(&self, size: ThumbnailSize, file_path: &str) -> Result<String> {
        let path = thumbnail_path(size, file_path)?;
        debug!("Resolving {size}px thumbnail at {path}");
        self.storage.download_url(&path).await
    }
}

/// Caches each item under its own identifier.
async fn store_all<T>(cache: &dyn MediaCache<T>, items: &[T])
where
    T: Identified + Clone + Send + Sync + 'static,
{
    for item in items {
        cache.insert(item.id().to_string(), item.clone()).await;
    }
    debug!("Cached {} media items", items.len());
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
