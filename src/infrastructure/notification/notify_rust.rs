//! Cross-platform notification presenter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationPresenter, PresentError};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::NotificationFields;

/// Cross-platform presenter using notify-rust
pub struct NotifyRustPresenter {
    /// Application name shown by the notification daemon
    app_name: String,
}

impl NotifyRustPresenter {
    /// Create a presenter with the default app name
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for NotifyRustPresenter {
    async fn present(&self, fields: &NotificationFields) -> Result<(), PresentError> {
        let fields = fields.clone();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification.appname(&app_name).summary(&fields.title);

            // Expanded text, when present, replaces the short body entirely
            match &fields.big_text {
                Some(big_text) => notification.body(big_text),
                None => notification.body(&fields.message),
            };

            // Image paths are a freedesktop capability; no-op elsewhere
            #[cfg(all(unix, not(target_os = "macos")))]
            if let Some(path) = &fields.image_url {
                notification.image_path(path);
            }

            notification
                .show()
                .map_err(|e| PresentError::ShowFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| PresentError::ShowFailed(format!("Task join error: {}", e)))?
    }
}
