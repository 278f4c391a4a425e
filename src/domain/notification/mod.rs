//! Notification value objects

pub mod fields;

pub use fields::{is_remote_url, NotificationFields};
