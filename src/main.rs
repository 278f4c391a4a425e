//! NotifyRelay CLI entry point

use std::process::ExitCode;

use clap::Parser;

use notify_relay::cli::{
    app::{load_merged_config, run_poll, run_send, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, PollOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use notify_relay::domain::config::AppConfig;
use notify_relay::domain::notification::NotificationFields;
use notify_relay::infrastructure::XdgConfigStore;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("notify_relay=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Poll {
            url,
            interval,
            foreground,
        } => {
            let cli_config = AppConfig {
                polling_url: url,
                interval_minutes: interval,
                app_name: None,
            };
            let config = load_merged_config(cli_config).await;

            let Some(url) = config.polling_url.clone() else {
                presenter.error("No feed url: pass --url or set polling_url in the config file");
                return ExitCode::from(EXIT_USAGE_ERROR);
            };

            let options = PollOptions {
                url,
                interval_minutes: config.interval_or_default(),
                foreground,
                app_name: config.app_name_or_default().to_string(),
            };

            run_poll(options).await
        }
        Commands::Send {
            title,
            message,
            big_text,
            image,
        } => {
            let config = load_merged_config(AppConfig::empty()).await;

            let mut fields = NotificationFields::new(title, message);
            if let Some(big_text) = big_text {
                fields = fields.with_big_text(big_text);
            }
            if let Some(image) = image {
                fields = fields.with_image_url(image);
            }

            run_send(fields, config.app_name_or_default().to_string()).await
        }
    }
}
