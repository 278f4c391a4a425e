//! HTTP feed fetcher adapter using reqwest

use async_trait::async_trait;

use crate::application::ports::{FetchError, Fetcher};

/// HTTP fetcher for the remote notification feed
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn parse_url(url: &str) -> Result<reqwest::Url, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(FetchError::InvalidUrl(format!(
                "unsupported scheme: {other}"
            ))),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Self::parse_url(url)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::Connect(e.to_string())
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(body)
    }
}
