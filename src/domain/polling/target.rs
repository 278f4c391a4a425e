//! Polling target value object

use std::fmt;

use crate::domain::error::ValidationError;

/// Default polling interval when the caller passes none or a non-positive value
pub const DEFAULT_INTERVAL_MINUTES: u32 = 15;

/// Which background service, if any, currently owns the polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    #[default]
    None,
    Polling,
    Foreground,
}

impl ServiceKind {
    /// Get the string representation reported to the host
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Polling => "polling",
            Self::Foreground => "foreground",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated url + interval pair for one polling session.
///
/// The background task re-reads this each tick, so interval changes made by a
/// restart take effect on the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTarget {
    pub url: String,
    pub interval_minutes: u32,
}

impl PollTarget {
    /// Validate a url/interval pair from the host.
    ///
    /// An empty url is the only host-visible error. A non-positive interval is
    /// coerced to the default rather than rejected.
    pub fn new(url: impl Into<String>, interval_minutes: u32) -> Result<Self, ValidationError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }

        let interval_minutes = if interval_minutes > 0 {
            interval_minutes
        } else {
            DEFAULT_INTERVAL_MINUTES
        };

        Ok(Self {
            url,
            interval_minutes,
        })
    }
}
