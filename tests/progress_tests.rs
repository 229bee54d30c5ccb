//! Tests for progress sinks wired into the fetcher.

use std::sync::{Arc, Mutex};

use verifetch::progress::{LogProgress, ProgressBarOpts, ProgressBarSink, ProgressSink};
use verifetch::FetcherBuilder;

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_progress_bar_sink_tracks_transfer() {
    let transport = MockTransport::new().route(OK_URL, MockResponse::ok(b"abcdefgh").chunked(3));
    let sink = ProgressBarSink::new(ProgressBarOpts::hidden());
    let fetcher = FetcherBuilder::new().progress(sink.clone()).build(transport);

    fetcher.fetch(OK_URL, true, false).await.unwrap();

    assert_eq!(sink.bar().length(), Some(8));
    assert_eq!(sink.bar().position(), 8);
    assert!(sink.bar().is_finished());
}

#[tokio::test]
async fn test_closure_sink() {
    let transport = MockTransport::new().route(OK_URL, MockResponse::ok(b"abcd").chunked(2));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let fetcher = FetcherBuilder::new()
        .progress(move |received: u64, total: u64| recorder.lock().unwrap().push((received, total)))
        .build(transport);

    fetcher.fetch(OK_URL, true, false).await.unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![(2, 4), (4, 4)]);
}

#[tokio::test]
async fn test_default_sink_is_log_progress() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("verifetch=debug"))
        .with_test_writer()
        .try_init();

    let transport = scenario_transport();
    let result = FetcherBuilder::new()
        .build(transport)
        .fetch(REDIRECT_URL, true, true)
        .await
        .unwrap();
    assert_eq!(result.body, b"abcd");
}

#[test]
fn test_progress_bar_opts() {
    assert!(ProgressBarOpts::default().is_enabled());
    assert!(ProgressBarOpts::counter().is_enabled());
    assert!(!ProgressBarOpts::hidden().is_enabled());
    assert!(ProgressBarOpts::hidden().to_progress_bar(10).is_hidden());
}

#[test]
fn test_log_progress_accepts_notifications() {
    LogProgress.progress(0, 10);
    LogProgress.progress(10, 10);
    LogProgress.finish();
}
