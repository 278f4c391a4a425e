//! Notification presentation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationFields;

/// Presentation errors
#[derive(Debug, Clone, Error)]
pub enum PresentError {
    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// Port for rendering a platform notification.
///
/// Receives normalized fields: title and message are both non-empty, and any
/// image reference is a local path.
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    /// Display the notification.
    async fn present(&self, fields: &NotificationFields) -> Result<(), PresentError>;
}

/// Blanket implementation for boxed presenter types
#[async_trait]
impl NotificationPresenter for Box<dyn NotificationPresenter> {
    async fn present(&self, fields: &NotificationFields) -> Result<(), PresentError> {
        self.as_ref().present(fields).await
    }
}
