//! [`Transport`] implementation backed by `reqwest`.

use super::client::{create_http_client, HttpClientConfig};
use super::transport::{ReceiveStatus, SizeState, Transport, TransportResult};

use bytes::{Buf, Bytes};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Response, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use tracing::trace;

/// Production transport using a middleware-wrapped `reqwest` client.
///
/// Cloning is cheap and clones share the connection pool; every fetch still
/// opens its own [`ReqwestContext`].
///
/// The body size is taken from `Content-Length`. A response without it, such
/// as one sent with chunked transfer encoding, fails the size query with
/// [`Error::Transport`](crate::Error::Transport) at
/// [`TransportStep::SizeQuery`](crate::TransportStep::SizeQuery).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

/// State of one request issued through a [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestContext {
    url: Url,
    headers: HeaderMap,
    response: Option<Response>,
    /// Part of the last chunk that did not fit in the caller's buffer.
    pending: Bytes,
    received: u64,
}

impl ReqwestTransport {
    /// Creates a transport with the default client configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Creates a transport from an explicit client configuration.
    pub fn with_config(config: HttpClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: create_http_client(config)?,
        })
    }

    /// Wraps an already configured client.
    ///
    /// The client must not follow redirects itself, otherwise the fetcher
    /// never sees the 3xx responses it is supposed to count.
    pub fn from_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

impl ReqwestContext {
    fn response(&self) -> TransportResult<&Response> {
        self.response
            .as_ref()
            .ok_or_else(|| "request has not been sent".into())
    }
}

impl Transport for ReqwestTransport {
    type Context = ReqwestContext;

    fn open(&self, url: &str) -> TransportResult<ReqwestContext> {
        let url = Url::parse(url)?;
        trace!("Opening context for {}", url);
        Ok(ReqwestContext {
            url,
            headers: HeaderMap::new(),
            response: None,
            pending: Bytes::new(),
            received: 0,
        })
    }

    fn add_header(
        &self,
        context: &mut ReqwestContext,
        name: &str,
        value: &str,
    ) -> TransportResult<()> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        context.headers.insert(name, value);
        Ok(())
    }

    async fn begin(&self, context: &mut ReqwestContext) -> TransportResult<()> {
        let response = self
            .client
            .get(context.url.clone())
            .headers(context.headers.clone())
            .send()
            .await?;
        context.response = Some(response);
        Ok(())
    }

    fn status(&self, context: &ReqwestContext) -> TransportResult<u16> {
        Ok(context.response()?.status().as_u16())
    }

    fn header(&self, context: &ReqwestContext, name: &str) -> Option<String> {
        context
            .response
            .as_ref()?
            .headers()
            .get(name)?
            .to_str()
            .ok()
            .map(String::from)
    }

    fn size_state(&self, context: &ReqwestContext) -> TransportResult<SizeState> {
        let total = context
            .response()?
            .content_length()
            .ok_or("response has no Content-Length")?;
        Ok(SizeState {
            offset: context.received,
            total,
        })
    }

    async fn receive(
        &self,
        context: &mut ReqwestContext,
        buf: &mut [u8],
    ) -> TransportResult<ReceiveStatus> {
        if context.pending.is_empty() {
            let response = context
                .response
                .as_mut()
                .ok_or("request has not been sent")?;
            match response.chunk().await? {
                Some(chunk) => context.pending = chunk,
                None => return Ok(ReceiveStatus::Complete),
            }
        }

        let n = context.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&context.pending[..n]);
        context.pending.advance(n);
        context.received += n as u64;

        Ok(ReceiveStatus::Pending)
    }

    fn close(&self, context: ReqwestContext) {
        trace!("Closing context for {}", context.url);
        drop(context);
    }
}
