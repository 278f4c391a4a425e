//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod fetcher;
pub mod image;
pub mod presenter;

// Re-export common types
pub use config::ConfigStore;
pub use fetcher::{FetchError, Fetcher};
pub use image::{ImageDownloader, ImageError};
pub use presenter::{NotificationPresenter, PresentError};
