//! Thumbnail naming convention.

use std::fmt;

use log::error;

use crate::error::{ClientError, Result};

/// Pre-rendered thumbnail widths available in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailSize {
    SixtyFour,
    TwoFiftySix,
    FiveTwelve,
}

impl ThumbnailSize {
    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::SixtyFour => 64,
            ThumbnailSize::TwoFiftySix => 256,
            ThumbnailSize::FiveTwelve => 512,
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}

impl TryFrom<u32> for ThumbnailSize {
    type Error = ClientError;

    fn try_from(pixels: u32) -> Result<Self> {
        match pixels {
            64 => Ok(ThumbnailSize::SixtyFour),
            256 => Ok(ThumbnailSize::TwoFiftySix),
            512 => Ok(ThumbnailSize::FiveTwelve),
            other => Err(ClientError::UnsupportedThumbnailSize(other)),
        }
    }
}

/// Rewrites the last segment of `file_path` to `thumb@{size}_{name}`.
///
/// Only the final segment changes, even if an earlier directory has the
/// same name as the file.
pub fn thumbnail_path(size: ThumbnailSize, file_path: &str) -> Result<String> {
    let (dir, image_name) = match file_path.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, file_path),
    };

    if image_name.is_empty() {
        error!("No image name in file path '{file_path}'");
        return Err(ClientError::InvalidPath(file_path.to_string()));
    }

    let thumb_name = format!("thumb@{size}_{image_name}");
    Ok(match dir {
        Some(dir) => format!("{dir}/{thumb_name}"),
        None => thumb_name,
    })
}
