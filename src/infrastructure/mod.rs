//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the network, the filesystem, and the platform
//! notification backend.

pub mod config;
pub mod http;
pub mod image;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use http::HttpFetcher;
pub use image::TempImageDownloader;
pub use notification::NotifyRustPresenter;
