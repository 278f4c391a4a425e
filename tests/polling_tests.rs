//! End-to-end polling pipeline tests against a local mock server

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notify_relay::application::ports::{NotificationPresenter, PresentError};
use notify_relay::application::{Dispatcher, PollingController};
use notify_relay::domain::notification::NotificationFields;
use notify_relay::infrastructure::{HttpFetcher, TempImageDownloader};

/// Records every notification instead of raising it
#[derive(Default)]
struct CollectingPresenter {
    shown: Mutex<Vec<NotificationFields>>,
}

impl CollectingPresenter {
    fn shown(&self) -> Vec<NotificationFields> {
        self.shown.lock().unwrap().clone()
    }
}

/// Local handle around the collector; the presenter port can only be
/// implemented for types owned by this test crate
#[derive(Clone)]
struct SharedPresenter(Arc<CollectingPresenter>);

#[async_trait]
impl NotificationPresenter for SharedPresenter {
    async fn present(&self, fields: &NotificationFields) -> Result<(), PresentError> {
        self.0.shown.lock().unwrap().push(fields.clone());
        Ok(())
    }
}

type TestController = PollingController<HttpFetcher, TempImageDownloader, SharedPresenter>;

fn controller(downloader: TempImageDownloader) -> (TestController, Arc<CollectingPresenter>) {
    let presenter = Arc::new(CollectingPresenter::default());
    let dispatcher = Dispatcher::new(downloader, SharedPresenter(Arc::clone(&presenter)));
    (
        PollingController::new(HttpFetcher::new(), dispatcher),
        presenter,
    )
}

/// Poll until `cond` holds or five seconds pass
async fn wait_until(mut cond: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !cond() {
        assert!(Instant::now() < deadline, "condition not reached in time");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn feed_items_reach_the_presenter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"notifications":[
                {"title":"Build finished","message":"All green"},
                {"title":"","message":"Deploy pending"}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let (controller, presenter) = controller(TempImageDownloader::new());
    controller
        .start_polling(&format!("{}/feed", server.uri()), 60)
        .await
        .unwrap();
    wait_until(|| presenter.shown().len() >= 2).await;
    controller.stop().await;

    let notes = presenter.shown();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Build finished");
    assert_eq!(notes[0].message, "All green");
    // Title-less item gets the message promoted into the title slot
    assert_eq!(notes[1].title, "Deploy pending");
}

#[tokio::test]
async fn remote_image_is_cached_to_a_local_file() {
    let server = MockServer::start().await;
    let image_bytes: Vec<u8> = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"success":true,"data":{{"title":"Photo","message":"New upload","imageUrl":"{}/shots/latest.png"}}}}"#,
            server.uri()
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shots/latest.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(image_bytes.clone()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (controller, presenter) = controller(TempImageDownloader::with_dir(dir.path()));
    controller
        .start_polling(&format!("{}/feed", server.uri()), 60)
        .await
        .unwrap();
    wait_until(|| !presenter.shown().is_empty()).await;
    controller.stop().await;

    let notes = presenter.shown();
    let cached = notes[0].image_url.as_deref().expect("image path expected");
    assert!(cached.starts_with(dir.path().to_str().unwrap()));
    assert!(cached.ends_with(".png"));
    assert_eq!(std::fs::read(cached).unwrap(), image_bytes);
}

#[tokio::test]
async fn missing_image_degrades_to_text_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"success":true,"data":{{"title":"Photo","message":"Gone","imageUrl":"{}/missing.png"}}}}"#,
            server.uri()
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (controller, presenter) = controller(TempImageDownloader::new());
    controller
        .start_polling(&format!("{}/feed", server.uri()), 60)
        .await
        .unwrap();
    wait_until(|| !presenter.shown().is_empty()).await;
    controller.stop().await;

    let notes = presenter.shown();
    assert_eq!(notes[0].title, "Photo");
    assert!(notes[0].image_url.is_none());
}

#[tokio::test]
async fn server_error_keeps_the_loop_alive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (controller, presenter) = controller(TempImageDownloader::new());
    controller
        .start_polling(&format!("{}/feed", server.uri()), 60)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(controller.is_running());
    assert!(presenter.shown().is_empty());
    controller.stop().await;
}

#[tokio::test]
async fn empty_body_shows_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let (controller, presenter) = controller(TempImageDownloader::new());
    controller
        .start_polling(&format!("{}/feed", server.uri()), 60)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(controller.is_running());
    assert!(presenter.shown().is_empty());
    controller.stop().await;
}

#[tokio::test]
async fn stop_returns_quickly_with_a_long_interval() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"notifications":[{"title":"T","message":"M"}]}"#),
        )
        .mount(&server)
        .await;

    let (controller, presenter) = controller(TempImageDownloader::new());
    controller
        .start_polling(&format!("{}/feed", server.uri()), 24 * 60)
        .await
        .unwrap();
    wait_until(|| !presenter.shown().is_empty()).await;

    let started = Instant::now();
    controller.stop().await;
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(!controller.is_running());
}
