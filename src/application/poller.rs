//! Polling use case
//!
//! Owns the lifecycle of the background polling task: start, stop, interval
//! management, and the per-tick fetch -> parse -> dispatch pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::error::ValidationError;
use crate::domain::feed::parse_feed;
use crate::domain::polling::{PollTarget, ServiceKind};

use super::dispatch::{DispatchError, Dispatcher};
use super::ports::{FetchError, Fetcher, ImageDownloader, NotificationPresenter};

/// Granularity of the interval sleep. Cancellation is observed within roughly
/// one slice regardless of how long the interval is.
const SLEEP_SLICE: Duration = Duration::from_secs(1);

/// One spawned polling task plus the signal used to cancel it
struct ActiveSession {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Polling lifecycle controller.
///
/// At most one background task is active per controller instance. Starting
/// while a session is active stops and fully joins the old task before the new
/// one spawns, so ticks from two sessions never interleave. `stop` blocks the
/// caller until the task has exited: once it returns, no further notifications
/// from that session will appear.
pub struct PollingController<F, D, P>
where
    F: Fetcher,
    D: ImageDownloader,
    P: NotificationPresenter,
{
    fetcher: Arc<F>,
    dispatcher: Arc<Dispatcher<D, P>>,
    session: Mutex<Option<ActiveSession>>,
    // Readable without touching the session lock, so a task asked to stop is
    // never left waiting on the lock its canceller holds.
    running: Arc<AtomicBool>,
    service: StdMutex<ServiceKind>,
}

impl<F, D, P> PollingController<F, D, P>
where
    F: Fetcher + 'static,
    D: ImageDownloader + 'static,
    P: NotificationPresenter + 'static,
{
    /// Create a controller around a fetcher and a dispatcher
    pub fn new(fetcher: F, dispatcher: Dispatcher<D, P>) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            dispatcher: Arc::new(dispatcher),
            session: Mutex::new(None),
            running: Arc::new(AtomicBool::new(false)),
            service: StdMutex::new(ServiceKind::None),
        }
    }

    /// Start polling the given url. Fails only on an empty url; a non-positive
    /// interval falls back to the default. Replaces any active session.
    pub async fn start_polling(
        &self,
        url: &str,
        interval_minutes: u32,
    ) -> Result<(), ValidationError> {
        self.start(url, interval_minutes, ServiceKind::Polling).await
    }

    /// Start the polling loop on behalf of a foreground service. Same start
    /// path as [`Self::start_polling`]; only the reported service kind differs.
    pub async fn start_foreground(
        &self,
        url: &str,
        interval_minutes: u32,
    ) -> Result<(), ValidationError> {
        self.start(url, interval_minutes, ServiceKind::Foreground)
            .await
    }

    async fn start(
        &self,
        url: &str,
        interval_minutes: u32,
        kind: ServiceKind,
    ) -> Result<(), ValidationError> {
        let target = PollTarget::new(url, interval_minutes)?;

        // Replace-on-restart: the old task is joined before the new one spawns
        self.stop().await;

        let (stop_tx, stop_rx) = watch::channel(false);
        let shared_target = Arc::new(StdMutex::new(target));
        self.running.store(true, Ordering::SeqCst);
        *self.service.lock().unwrap_or_else(|e| e.into_inner()) = kind;

        let handle = tokio::spawn(run_loop(
            Arc::clone(&self.fetcher),
            Arc::clone(&self.dispatcher),
            shared_target,
            Arc::clone(&self.running),
            stop_rx,
        ));

        *self.session.lock().await = Some(ActiveSession { stop_tx, handle });
        Ok(())
    }

    /// Stop the active session, if any, and wait for its task to exit.
    /// Idempotent: stopping while idle is a no-op.
    pub async fn stop(&self) {
        let taken = self.session.lock().await.take();
        if let Some(session) = taken {
            self.running.store(false, Ordering::SeqCst);
            let _ = session.stop_tx.send(true);
            if let Err(error) = session.handle.await {
                warn!(%error, "polling task did not shut down cleanly");
            }
        }
        *self.service.lock().unwrap_or_else(|e| e.into_inner()) = ServiceKind::None;
    }

    /// Which service currently owns the polling loop
    pub fn active_service(&self) -> ServiceKind {
        if !self.running.load(Ordering::SeqCst) {
            return ServiceKind::None;
        }
        *self.service.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether a background task is currently active
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

async fn run_loop<F, D, P>(
    fetcher: Arc<F>,
    dispatcher: Arc<Dispatcher<D, P>>,
    target: Arc<StdMutex<PollTarget>>,
    running: Arc<AtomicBool>,
    mut stop_rx: watch::Receiver<bool>,
) where
    F: Fetcher,
    D: ImageDownloader,
    P: NotificationPresenter,
{
    debug!("polling task started");

    loop {
        if !running.load(Ordering::SeqCst) || *stop_rx.borrow() {
            break;
        }

        // Snapshot under the lock; never hold it across network I/O
        let (url, interval_minutes) = {
            let target = target.lock().unwrap_or_else(|e| e.into_inner());
            (target.url.clone(), target.interval_minutes)
        };

        run_tick(fetcher.as_ref(), dispatcher.as_ref(), &url).await;

        if !sleep_interval(interval_minutes, &running, &mut stop_rx).await {
            break;
        }
    }

    debug!("polling task exited");
}

/// One tick: fetch, parse, dispatch each item. Every failure in here is
/// recovered locally; the task only ends via an explicit stop.
async fn run_tick<F, D, P>(fetcher: &F, dispatcher: &Dispatcher<D, P>, url: &str)
where
    F: Fetcher,
    D: ImageDownloader,
    P: NotificationPresenter,
{
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(FetchError::EmptyBody) => {
            debug!(url, "feed body empty, nothing to show this tick");
            return;
        }
        Err(error) => {
            warn!(url, %error, "feed fetch failed, skipping tick");
            return;
        }
    };

    let items = parse_feed(&body);
    debug!(url, count = items.len(), "parsed feed items");

    for fields in items {
        match dispatcher.dispatch(fields).await {
            Ok(()) => {}
            Err(DispatchError::Validation(error)) => {
                debug!(%error, "skipping feed item");
            }
            Err(error) => {
                warn!(%error, "failed to present feed item");
            }
        }
    }
}

/// Sleep for the interval in one-second slices, waking early on cancellation.
/// Returns false when the session was cancelled.
async fn sleep_interval(
    interval_minutes: u32,
    running: &AtomicBool,
    stop_rx: &mut watch::Receiver<bool>,
) -> bool {
    let deadline =
        tokio::time::Instant::now() + Duration::from_secs(u64::from(interval_minutes) * 60);

    loop {
        if !running.load(Ordering::SeqCst) || *stop_rx.borrow() {
            return false;
        }

        let now = tokio::time::Instant::now();
        if now >= deadline {
            return true;
        }

        let slice = (deadline - now).min(SLEEP_SLICE);
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    return false;
                }
            }
            _ = tokio::time::sleep(slice) => {}
        }
    }
}
