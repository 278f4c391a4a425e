//! Notification dispatch use case
//!
//! The single presentation path. Everything that ends up on screen - whether it
//! came from a polling tick or a direct host command - goes through
//! [`Dispatcher::dispatch`].

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::error::ValidationError;
use crate::domain::notification::NotificationFields;

use super::ports::{ImageDownloader, NotificationPresenter, PresentError};

/// Errors from the dispatch use case
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid notification: {0}")]
    Validation(#[from] ValidationError),

    #[error("Presentation failed: {0}")]
    Present(#[from] PresentError),
}

/// Notification dispatch use case
pub struct Dispatcher<D, P>
where
    D: ImageDownloader,
    P: NotificationPresenter,
{
    images: D,
    presenter: P,
}

impl<D, P> Dispatcher<D, P>
where
    D: ImageDownloader,
    P: NotificationPresenter,
{
    /// Create a new dispatcher
    pub fn new(images: D, presenter: P) -> Self {
        Self { images, presenter }
    }

    /// Normalize, resolve the image, and present one notification.
    ///
    /// A remote image url is replaced by a local temp copy before presentation;
    /// if the download fails the notification goes out text-only rather than
    /// failing. Validation failures and presentation failures are the only
    /// errors this returns.
    pub async fn dispatch(&self, fields: NotificationFields) -> Result<(), DispatchError> {
        let mut fields = fields.normalize()?;

        if fields.has_remote_image() {
            if let Some(url) = fields.image_url.take() {
                match self.images.download(&url).await {
                    Ok(path) => {
                        debug!(%url, path = %path.display(), "cached remote notification image");
                        fields.image_url = Some(path.to_string_lossy().into_owned());
                    }
                    Err(error) => {
                        warn!(%url, %error, "image download failed, showing text-only");
                    }
                }
            }
        }

        self.presenter.present(&fields).await?;
        Ok(())
    }
}
