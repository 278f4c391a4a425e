//! Image caching adapters

pub mod temp_download;

pub use temp_download::TempImageDownloader;
