//! Notification presenter adapters

pub mod notify_rust;

pub use notify_rust::NotifyRustPresenter;
