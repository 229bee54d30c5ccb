use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use verifetch::error::TransportError;
use verifetch::http::{ReceiveStatus, SizeState, Transport, TransportResult};
use verifetch::{Fetcher, FetcherBuilder, ProgressSink, TransportStep};

// Common test constants
pub const OK_URL: &str = "http://example/ok";
pub const REDIRECT_URL: &str = "http://example/redirect";
pub const MISSING_URL: &str = "http://example/missing";
pub const EMPTY_MD5: &str = "1B2M2Y8AsgTpgAmY7PhCfg==";
pub const ABCD_MD5: &str = "4vxxTEcn7pOV8yTNLn8zHw==";

/// A scripted response served by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Size announced by the size query; defaults to the body length.
    pub declared_size: Option<u64>,
    /// Largest number of bytes delivered per receive call.
    pub chunk: usize,
    /// Transport offset before the first body byte.
    pub start_offset: u64,
    /// Step at which the transport reports a failure.
    pub fail_at: Option<TransportStep>,
    /// Never deliver any data.
    pub stall: bool,
}

impl MockResponse {
    pub fn ok(body: &[u8]) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.to_vec(),
            declared_size: None,
            chunk: usize::MAX,
            start_offset: 0,
            fail_at: None,
            stall: false,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::ok(b"")
        }
    }

    pub fn redirect(status: u16, location: &str) -> Self {
        Self::status(status).header("Location", location)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn chunked(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    pub fn declared_size(mut self, size: u64) -> Self {
        self.declared_size = Some(size);
        self
    }

    pub fn start_offset(mut self, offset: u64) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn fail_at(mut self, step: TransportStep) -> Self {
        self.fail_at = Some(step);
        self
    }

    pub fn stalled(mut self) -> Self {
        self.stall = true;
        self
    }

    fn check(&self, step: TransportStep) -> TransportResult<()> {
        if self.fail_at == Some(step) {
            return Err(format!("scripted failure at {}", step).into());
        }
        Ok(())
    }
}

/// Lifecycle events recorded by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(String),
    Header(String, String),
    Begin(String),
    SizeQuery(String),
    Close(String),
}

/// In-memory transport serving scripted responses by exact URL.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: HashMap<String, MockResponse>,
    events: Arc<Mutex<Vec<Event>>>,
}

#[derive(Debug)]
pub struct MockContext {
    url: String,
    response: MockResponse,
    delivered: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, response: MockResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Open(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| matches(e)).count()
    }

    /// Every opened context has been closed exactly once.
    pub fn assert_balanced(&self) {
        let opens = self.count(|e| matches!(e, Event::Open(_)));
        let closes = self.count(|e| matches!(e, Event::Close(_)));
        assert!(opens > 0, "no context was opened");
        assert_eq!(opens, closes, "contexts leaked: {:?}", self.events());
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Transport for MockTransport {
    type Context = MockContext;

    fn open(&self, url: &str) -> TransportResult<MockContext> {
        let response = self
            .routes
            .get(url)
            .cloned()
            .ok_or_else(|| -> TransportError { format!("no route for {}", url).into() })?;
        response.check(TransportStep::Open)?;
        self.record(Event::Open(url.to_string()));
        Ok(MockContext {
            url: url.to_string(),
            response,
            delivered: 0,
        })
    }

    fn add_header(
        &self,
        context: &mut MockContext,
        name: &str,
        value: &str,
    ) -> TransportResult<()> {
        context.response.check(TransportStep::AddHeader)?;
        self.record(Event::Header(name.to_string(), value.to_string()));
        Ok(())
    }

    async fn begin(&self, context: &mut MockContext) -> TransportResult<()> {
        context.response.check(TransportStep::Begin)?;
        self.record(Event::Begin(context.url.clone()));
        Ok(())
    }

    fn status(&self, context: &MockContext) -> TransportResult<u16> {
        context.response.check(TransportStep::Status)?;
        Ok(context.response.status)
    }

    fn header(&self, context: &MockContext, name: &str) -> Option<String> {
        context
            .response
            .headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    fn size_state(&self, context: &MockContext) -> TransportResult<SizeState> {
        context.response.check(TransportStep::SizeQuery)?;
        self.record(Event::SizeQuery(context.url.clone()));
        let response = &context.response;
        Ok(SizeState {
            offset: response.start_offset + context.delivered as u64,
            total: response.declared_size.unwrap_or(response.body.len() as u64),
        })
    }

    async fn receive(
        &self,
        context: &mut MockContext,
        buf: &mut [u8],
    ) -> TransportResult<ReceiveStatus> {
        context.response.check(TransportStep::Receive)?;
        if context.response.stall {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        let remaining = &context.response.body[context.delivered..];
        let n = remaining.len().min(buf.len()).min(context.response.chunk);
        buf[..n].copy_from_slice(&remaining[..n]);
        context.delivered += n;

        if context.delivered == context.response.body.len() {
            Ok(ReceiveStatus::Complete)
        } else {
            Ok(ReceiveStatus::Pending)
        }
    }

    fn close(&self, context: MockContext) {
        self.record(Event::Close(context.url));
    }
}

/// Progress sink remembering every notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    pub events: Arc<Mutex<Vec<(u64, u64)>>>,
    pub finished: Arc<AtomicUsize>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<(u64, u64)> {
        self.events.lock().unwrap().clone()
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl ProgressSink for RecordingProgress {
    fn progress(&self, received: u64, total: u64) {
        self.events.lock().unwrap().push((received, total));
    }

    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

/// Creates the transport behind the ok / redirect / missing scenarios.
pub fn scenario_transport() -> MockTransport {
    MockTransport::new()
        .route(OK_URL, MockResponse::ok(b"abcd"))
        .route(REDIRECT_URL, MockResponse::redirect(302, OK_URL))
        .route(MISSING_URL, MockResponse::status(404))
}

/// Creates a fetcher over a clone of `transport`, so the caller keeps access
/// to the recorded events.
pub fn fetcher_for(transport: &MockTransport) -> Fetcher<MockTransport> {
    FetcherBuilder::new()
        .progress(verifetch::NoProgress)
        .build(transport.clone())
}

/// Creates a fetcher reporting progress to `progress`.
pub fn fetcher_with_progress(
    transport: &MockTransport,
    progress: &RecordingProgress,
) -> Fetcher<MockTransport> {
    FetcherBuilder::new()
        .progress(progress.clone())
        .build(transport.clone())
}
