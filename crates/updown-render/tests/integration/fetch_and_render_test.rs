use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;

use updown_render::FetchError;
use updown_render::infra::http::HttpTextSource;
use updown_render::usecase::render::{FetchAndRenderUseCase, fetch_and_render};
use updown_testing::{MockTextServer, RecordingTarget, RefusedUrl, Scripted};

fn usecase(
    server: &MockTextServer,
    target: &RecordingTarget,
) -> FetchAndRenderUseCase<HttpTextSource, RecordingTarget> {
    FetchAndRenderUseCase {
        source: HttpTextSource::new(&server.base_url()).unwrap(),
        target: target.clone(),
    }
}

// ── success ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_on_for_up() {
    let server = MockTextServer::start([("/up", Scripted::ok("ON"))]).await;
    let target = RecordingTarget::with_initial("0");

    usecase(&server, &target).up().await.unwrap();

    assert_eq!(target.current().as_deref(), Some("ON"));
    assert_eq!(target.writes(), vec!["0", "ON"]);
}

#[tokio::test]
async fn should_render_off_for_down() {
    let server = MockTextServer::start([("/down", Scripted::ok("OFF"))]).await;
    let target = RecordingTarget::with_initial("0");

    usecase(&server, &target).down().await.unwrap();

    assert_eq!(target.current().as_deref(), Some("OFF"));
}

#[tokio::test]
async fn should_render_empty_body() {
    let server = MockTextServer::start([("/up", Scripted::ok(""))]).await;
    let target = RecordingTarget::with_initial("0");

    let body = usecase(&server, &target).up().await.unwrap();

    assert_eq!(body, "");
    assert_eq!(target.current().as_deref(), Some(""));
}

#[tokio::test]
async fn should_render_from_absolute_url_with_uppercase_scheme() {
    let server = MockTextServer::start([("/value", Scripted::ok("5"))]).await;
    let target = RecordingTarget::new();
    let source = HttpTextSource::new("http://unused.invalid").unwrap();
    let url = server.url("/value").replacen("http://", "HTTP://", 1);

    fetch_and_render(&source, &url, &target).await.unwrap();

    assert_eq!(target.current().as_deref(), Some("5"));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn should_render_from_scheme_relative_url() {
    let server = MockTextServer::start([("/up", Scripted::ok("ON"))]).await;
    let target = RecordingTarget::new();
    let source = HttpTextSource::new("http://unused.invalid/page/").unwrap();
    let url = server.url("/up").replacen("http:", "", 1);

    fetch_and_render(&source, &url, &target).await.unwrap();

    assert_eq!(target.current().as_deref(), Some("ON"));
}

// ── non-success ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_leave_target_unchanged_on_500() {
    let server = MockTextServer::start([(
        "/up",
        Scripted::status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
    )])
    .await;
    let target = RecordingTarget::with_initial("prior");

    let result = usecase(&server, &target).up().await;

    assert!(
        matches!(result, Err(FetchError::Status(500))),
        "expected Status(500), got {result:?}"
    );
    assert_eq!(target.writes(), vec!["prior"]);
}

#[tokio::test]
async fn should_treat_other_2xx_as_failure() {
    let server =
        MockTextServer::start([("/up", Scripted::status(StatusCode::ACCEPTED, "later"))]).await;
    let target = RecordingTarget::with_initial("prior");

    let result = usecase(&server, &target).up().await;

    assert!(matches!(result, Err(FetchError::Status(202))));
    assert_eq!(target.write_count(), 1);
}

#[tokio::test]
async fn should_leave_target_unchanged_on_network_error() {
    let refused = RefusedUrl::bind();
    let target = RecordingTarget::with_initial("prior");
    let source = HttpTextSource::new("http://unused.invalid").unwrap();

    let result = fetch_and_render(&source, &refused.url("/up"), &target).await;

    assert!(
        matches!(result, Err(FetchError::Network(_))),
        "expected Network, got {result:?}"
    );
    assert_eq!(target.writes(), vec!["prior"]);
}

#[tokio::test]
async fn should_leave_target_unchanged_on_unsupported_scheme() {
    let target = RecordingTarget::with_initial("prior");
    let source = HttpTextSource::new("http://unused.invalid").unwrap();

    let result = fetch_and_render(&source, "ftp://127.0.0.1/up", &target).await;

    assert!(matches!(result, Err(FetchError::InvalidUrl(_))), "got {result:?}");
    assert_eq!(target.writes(), vec!["prior"]);
}

#[tokio::test]
async fn should_not_panic_through_spawn_on_network_error() {
    let refused = RefusedUrl::bind();
    let target = RecordingTarget::with_initial("prior");
    let usecase = Arc::new(FetchAndRenderUseCase {
        source: HttpTextSource::new("http://unused.invalid").unwrap(),
        target: target.clone(),
    });

    let joined = usecase.spawn(refused.url("/down")).await;

    let result = joined.expect("fetch task panicked");
    assert!(matches!(result, Err(FetchError::Network(_))));
    assert_eq!(target.writes(), vec!["prior"]);
}

// ── ordering ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reflect_later_call_when_sequential() {
    let server = MockTextServer::start([
        ("/up", Scripted::ok("ON")),
        ("/down", Scripted::ok("OFF")),
    ])
    .await;
    let target = RecordingTarget::new();
    let usecase = usecase(&server, &target);

    usecase.up().await.unwrap();
    usecase.down().await.unwrap();

    assert_eq!(target.writes(), vec!["ON", "OFF"]);
    assert_eq!(server.hits(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn should_reflect_later_completing_response_when_overlapping() {
    let server = MockTextServer::start([
        ("/up", Scripted::ok("ON").delayed(Duration::from_millis(300))),
        ("/down", Scripted::ok("OFF")),
    ])
    .await;
    let target = RecordingTarget::new();
    let usecase = Arc::new(usecase(&server, &target));

    let slow = usecase.spawn("/up");
    let fast = usecase.spawn("/down");
    fast.await.unwrap().unwrap();
    slow.await.unwrap().unwrap();

    assert_eq!(target.writes(), vec!["OFF", "ON"]);
    assert_eq!(target.current().as_deref(), Some("ON"));
}
