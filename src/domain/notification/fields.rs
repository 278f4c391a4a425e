//! Notification fields value object

use crate::domain::error::ValidationError;

/// Returns true if the image reference must be downloaded before presentation.
/// Anything else is treated as an already-local path.
pub fn is_remote_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// One parsed notification instance.
///
/// Materialized per feed item inside a polling tick (or built directly by a
/// host command), handed to the presenter, then discarded. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFields {
    /// Notification title (may be empty before normalization)
    pub title: String,
    /// Notification body (may be empty before normalization)
    pub message: String,
    /// Long-form text shown instead of the message body when present
    pub big_text: Option<String>,
    /// Image reference: a local path or a remote http(s) url
    pub image_url: Option<String>,
}

impl NotificationFields {
    /// Create fields with just a title and message
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            big_text: None,
            image_url: None,
        }
    }

    /// Attach big text
    pub fn with_big_text(mut self, big_text: impl Into<String>) -> Self {
        self.big_text = Some(big_text.into());
        self
    }

    /// Attach an image reference (local path or remote url)
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Whether the image reference, if any, points at a remote server
    pub fn has_remote_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(is_remote_url)
    }

    /// Apply the title/message fallback policy shared by all presentation paths.
    ///
    /// Rejects when both fields are empty. When exactly one is empty it takes
    /// the other's value, so a single-field notification still renders both a
    /// title and a body.
    pub fn normalize(mut self) -> Result<Self, ValidationError> {
        if self.title.is_empty() && self.message.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        if self.title.is_empty() {
            self.title = self.message.clone();
        }
        if self.message.is_empty() {
            self.message = self.title.clone();
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_both_empty_is_rejected() {
        let err = NotificationFields::new("", "").normalize().unwrap_err();
        assert!(matches!(err, ValidationError::EmptyContent));
    }

    #[test]
    fn normalize_empty_title_mirrors_message() {
        let fields = NotificationFields::new("", "Hi").normalize().unwrap();
        assert_eq!(fields.title, "Hi");
        assert_eq!(fields.message, "Hi");
    }

    #[test]
    fn normalize_empty_message_mirrors_title() {
        let fields = NotificationFields::new("Hi", "").normalize().unwrap();
        assert_eq!(fields.title, "Hi");
        assert_eq!(fields.message, "Hi");
    }

    #[test]
    fn normalize_keeps_populated_fields() {
        let fields = NotificationFields::new("A", "B")
            .with_big_text("C")
            .with_image_url("/tmp/x.png")
            .normalize()
            .unwrap();
        assert_eq!(fields.title, "A");
        assert_eq!(fields.message, "B");
        assert_eq!(fields.big_text.as_deref(), Some("C"));
        assert_eq!(fields.image_url.as_deref(), Some("/tmp/x.png"));
    }

    #[test]
    fn remote_url_detection() {
        assert!(is_remote_url("http://example.com/a.png"));
        assert!(is_remote_url("https://example.com/a.png"));
        assert!(!is_remote_url("/var/tmp/a.png"));
        assert!(!is_remote_url("file:///tmp/a.png"));
        assert!(!is_remote_url("ftp://example.com/a.png"));
    }

    #[test]
    fn has_remote_image() {
        let remote = NotificationFields::new("A", "B").with_image_url("https://x/y.png");
        let local = NotificationFields::new("A", "B").with_image_url("/tmp/y.png");
        let none = NotificationFields::new("A", "B");
        assert!(remote.has_remote_image());
        assert!(!local.has_remote_image());
        assert!(!none.has_remote_image());
    }
}
