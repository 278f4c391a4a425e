//! Domain layer - Core business logic
//!
//! Contains value objects, feed parsing, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod feed;
pub mod notification;
pub mod polling;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use feed::parse_feed;
pub use notification::NotificationFields;
pub use polling::{PollTarget, ServiceKind, DEFAULT_INTERVAL_MINUTES};
