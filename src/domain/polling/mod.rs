//! Polling session value objects

pub mod target;

pub use target::{PollTarget, ServiceKind, DEFAULT_INTERVAL_MINUTES};
