//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// NotifyRelay - bridge a remote notification feed to the desktop
#[derive(Parser, Debug)]
#[command(name = "notify-relay")]
#[command(version = "0.1.0")]
#[command(about = "Polls a notification feed and relays items to the desktop")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll a feed url and relay its notifications
    Poll {
        /// Feed url to poll (falls back to the config file)
        #[arg(short, long, value_name = "URL")]
        url: Option<String>,

        /// Polling interval in minutes
        #[arg(short, long, value_name = "MINUTES")]
        interval: Option<u32>,

        /// Report the loop as a foreground service
        #[arg(short, long)]
        foreground: bool,
    },
    /// Show a single notification without polling
    Send {
        /// Notification title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Notification body
        #[arg(short, long, default_value = "")]
        message: String,

        /// Expanded text shown instead of the body
        #[arg(short, long, value_name = "TEXT")]
        big_text: Option<String>,

        /// Image url or local path to attach
        #[arg(short = 'I', long, value_name = "URL")]
        image: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved poll options after merging args and config
#[derive(Debug, Clone)]
pub struct PollOptions {
    pub url: String,
    pub interval_minutes: u32,
    pub foreground: bool,
    pub app_name: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["polling_url", "interval_minutes", "app_name"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
