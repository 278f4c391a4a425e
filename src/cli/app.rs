//! Main app runners for the poll and send commands

use std::process::ExitCode;

use tracing::info;

use crate::application::ports::ConfigStore;
use crate::application::{DispatchError, Dispatcher, PollingController};
use crate::domain::config::AppConfig;
use crate::domain::notification::NotificationFields;
use crate::infrastructure::{
    HttpFetcher, NotifyRustPresenter, TempImageDownloader, XdgConfigStore,
};

use super::args::PollOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load config file and merge CLI-provided values over it
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        Presenter::new().warn(&format!("Failed to load config: {}", e));
        AppConfig::empty()
    });

    file_config.merge(cli_config)
}

/// Run the polling loop until interrupted
pub async fn run_poll(options: PollOptions) -> ExitCode {
    let presenter = Presenter::new();

    let dispatcher = Dispatcher::new(
        TempImageDownloader::new(),
        NotifyRustPresenter::with_app_name(options.app_name.clone()),
    );
    let controller = PollingController::new(HttpFetcher::new(), dispatcher);

    let started = if options.foreground {
        controller
            .start_foreground(&options.url, options.interval_minutes)
            .await
    } else {
        controller
            .start_polling(&options.url, options.interval_minutes)
            .await
    };

    if let Err(e) = started {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    info!(
        url = %options.url,
        interval_minutes = options.interval_minutes,
        service = %controller.active_service(),
        "polling started"
    );
    presenter.info(&format!(
        "Polling {} every {} minute(s), Ctrl-C to stop",
        options.url, options.interval_minutes
    ));

    if let Err(e) = tokio::signal::ctrl_c().await {
        presenter.error(&format!("Failed to listen for shutdown signal: {}", e));
        controller.stop().await;
        return ExitCode::from(EXIT_ERROR);
    }

    controller.stop().await;
    presenter.success("Stopped");
    ExitCode::from(EXIT_SUCCESS)
}

/// Dispatch a single notification and exit
pub async fn run_send(fields: NotificationFields, app_name: String) -> ExitCode {
    let presenter = Presenter::new();

    let dispatcher = Dispatcher::new(
        TempImageDownloader::new(),
        NotifyRustPresenter::with_app_name(app_name),
    );

    match dispatcher.dispatch(fields).await {
        Ok(()) => {
            presenter.success("Notification sent");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e @ DispatchError::Validation(_)) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
