//! notify-relay - notification dispatch bridge
//!
//! This crate polls a remote JSON feed on an interval and raises each extracted
//! item as a desktop notification, optionally caching remote images to local
//! temp storage first.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification fields, feed parsing, polling targets, errors
//! - **Application**: Port interfaces (traits) and the polling/dispatch use cases
//! - **Infrastructure**: Adapter implementations (reqwest, notify-rust, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
