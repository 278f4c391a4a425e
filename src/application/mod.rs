//! Application layer - Use cases and port interfaces
//!
//! Contains the polling and dispatch use cases and trait definitions
//! for external system interactions.

pub mod dispatch;
pub mod poller;
pub mod ports;

// Re-export use cases
pub use dispatch::{DispatchError, Dispatcher};
pub use poller::PollingController;
