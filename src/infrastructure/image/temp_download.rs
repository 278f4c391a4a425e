//! Temp-file image downloader adapter
//!
//! Streams a remote image into a uniquely named temp file so the notification
//! backend can reference it by local path. Files are left in place after
//! display; the OS temp directory is the cleanup mechanism.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::ports::{ImageDownloader, ImageError};

const FILE_PREFIX: &str = "notify-relay-";
const DEFAULT_SUFFIX: &str = ".jpg";

/// Downloads notification images into the temp directory
pub struct TempImageDownloader {
    client: reqwest::Client,
    dir: Option<PathBuf>,
}

impl TempImageDownloader {
    /// Create a downloader targeting the OS temp directory
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            dir: None,
        }
    }

    /// Create a downloader writing into a specific directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            dir: Some(dir.into()),
        }
    }

    /// File suffix taken from the url path's extension, falling back to
    /// `.jpg` when there is none or it looks bogus
    fn suffix_for(url: &reqwest::Url) -> String {
        let path = url.path();
        let name = path.rsplit('/').next().unwrap_or("");
        match name.rsplit_once('.') {
            Some((stem, ext))
                if !stem.is_empty()
                    && !ext.is_empty()
                    && ext.len() <= 5
                    && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                format!(".{}", ext.to_ascii_lowercase())
            }
            _ => DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl Default for TempImageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageDownloader for TempImageDownloader {
    async fn download(&self, url: &str) -> Result<PathBuf, ImageError> {
        let url = reqwest::Url::parse(url).map_err(|e| ImageError::InvalidUrl(e.to_string()))?;
        let suffix = Self::suffix_for(&url);

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ImageError::Download(e.to_string()))?;

        let mut builder = tempfile::Builder::new();
        builder.prefix(FILE_PREFIX).suffix(&suffix);
        let temp = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| ImageError::Io(e.to_string()))?;

        // Hold only the path; if anything below fails, dropping it removes
        // the partial file
        let temp_path = temp.into_temp_path();

        let mut file = tokio::fs::File::create(&temp_path)
            .await
            .map_err(|e| ImageError::Io(e.to_string()))?;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ImageError::Download(e.to_string()))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| ImageError::Io(e.to_string()))?;
        }

        file.flush()
            .await
            .map_err(|e| ImageError::Io(e.to_string()))?;
        drop(file);

        let path = temp_path
            .keep()
            .map_err(|e| ImageError::Io(e.to_string()))?;

        debug!(url = %url, path = %path.display(), "image cached");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(url: &str) -> String {
        TempImageDownloader::suffix_for(&reqwest::Url::parse(url).unwrap())
    }

    #[test]
    fn suffix_comes_from_url_extension() {
        assert_eq!(suffix("https://x/img/photo.png"), ".png");
        assert_eq!(suffix("https://x/img/photo.JPEG"), ".jpeg");
    }

    #[test]
    fn suffix_defaults_to_jpg() {
        assert_eq!(suffix("https://x/img/photo"), ".jpg");
        assert_eq!(suffix("https://x/"), ".jpg");
        assert_eq!(suffix("https://x/img/.hidden"), ".jpg");
    }

    #[test]
    fn query_does_not_leak_into_suffix() {
        assert_eq!(suffix("https://x/photo.png?size=large"), ".png");
    }

    #[test]
    fn overlong_or_odd_extensions_fall_back() {
        assert_eq!(suffix("https://x/archive.backup1"), ".jpg");
        assert_eq!(suffix("https://x/file.t~r"), ".jpg");
    }

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        let downloader = TempImageDownloader::new();
        let result = downloader.download("not a url").await;
        assert!(matches!(result, Err(ImageError::InvalidUrl(_))));
    }
}
