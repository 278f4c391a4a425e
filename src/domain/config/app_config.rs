//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::polling::DEFAULT_INTERVAL_MINUTES;

/// Default application name shown on notifications
pub const DEFAULT_APP_NAME: &str = "NotifyRelay";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub polling_url: Option<String>,
    pub interval_minutes: Option<u32>,
    pub app_name: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            polling_url: None,
            interval_minutes: Some(DEFAULT_INTERVAL_MINUTES),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            polling_url: other.polling_url.or(self.polling_url),
            interval_minutes: other.interval_minutes.or(self.interval_minutes),
            app_name: other.app_name.or(self.app_name),
        }
    }

    /// Get the polling interval, or the default if not set
    pub fn interval_or_default(&self) -> u32 {
        self.interval_minutes.unwrap_or(DEFAULT_INTERVAL_MINUTES)
    }

    /// Get the application name, or the default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.polling_url.is_none());
        assert_eq!(config.interval_minutes, Some(DEFAULT_INTERVAL_MINUTES));
        assert_eq!(config.app_name, Some(DEFAULT_APP_NAME.to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.polling_url.is_none());
        assert!(config.interval_minutes.is_none());
        assert!(config.app_name.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            polling_url: Some("https://base/feed".to_string()),
            interval_minutes: Some(5),
            app_name: None,
        };
        let other = AppConfig {
            polling_url: Some("https://other/feed".to_string()),
            interval_minutes: None, // Should not override
            app_name: Some("Other".to_string()),
        };

        let merged = base.merge(other);
        assert_eq!(merged.polling_url, Some("https://other/feed".to_string()));
        assert_eq!(merged.interval_minutes, Some(5)); // Kept from base
        assert_eq!(merged.app_name, Some("Other".to_string()));
    }

    #[test]
    fn accessor_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.interval_or_default(), DEFAULT_INTERVAL_MINUTES);
        assert_eq!(config.app_name_or_default(), DEFAULT_APP_NAME);
    }
}
