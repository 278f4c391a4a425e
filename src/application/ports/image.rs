//! Image download port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Image download errors
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("Invalid image url: {0}")]
    InvalidUrl(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Failed to write image file: {0}")]
    Io(String),
}

/// Port for caching a remote image to local storage.
///
/// Only invoked for `http://`/`https://` references; anything else is treated
/// as an already-local path by the caller. A returned path always points at a
/// fully written file; on failure the caller drops the image and shows a
/// text-only notification.
#[async_trait]
pub trait ImageDownloader: Send + Sync {
    /// Fetch the image and persist it to a uniquely named local file.
    async fn download(&self, url: &str) -> Result<PathBuf, ImageError>;
}
