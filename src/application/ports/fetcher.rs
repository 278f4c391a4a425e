//! Feed fetch port interface

use async_trait::async_trait;
use thiserror::Error;

/// Fetch errors.
///
/// All of these are tick-local: the polling loop logs and moves on, and only
/// the initiating command can surface an error to the host.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Transfer failed: {0}")]
    Transport(String),

    /// An empty body means "nothing to show", not a failure
    #[error("Server returned an empty body")]
    EmptyBody,
}

/// Port for fetching the remote notification feed
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a single GET and return the response body as text.
    ///
    /// No retries, no authentication. The body is buffered fully in memory
    /// with no size cap.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
