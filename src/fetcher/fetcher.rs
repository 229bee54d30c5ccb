//! Core fetcher implementation.
//!
//! This module contains the [`Fetcher`] that drives a [`Transport`] through
//! one GET request: it sends the fixed User-Agent, branches on the status
//! code, follows redirects up to a bound, collects optional metadata and
//! streams the body into a zero-initialized buffer of the announced size.
//!
//! # Examples
//!
//! ```rust,no_run
//! use verifetch::fetcher::FetcherBuilder;
//! use verifetch::http::ReqwestTransport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().build(ReqwestTransport::new()?);
//! let result = fetcher.fetch("https://example.com/update.zip", true, true).await?;
//!
//! if result.verify() == Some(false) {
//!     println!("Corrupted download, discarding {} bytes", result.size);
//! }
//! # Ok(())
//! # }
//! ```

use super::config::{FetcherConfig, USER_AGENT};
use super::transfer::{ContextGuard, TransferState};
use crate::download::{FetchRequest, FetchResult, ResponseMetadata};
use crate::error::{Error, Result};
use crate::http::{ReceiveStatus, Transport};
use crate::progress::ProgressSink;

use reqwest::{
    header::{ETAG, LOCATION},
    Url,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Downloads resources fully into memory.
///
/// A fetcher owns its transport handle; nothing is shared between fetchers
/// and every fetch opens its own request context.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use verifetch::fetcher::FetcherBuilder;
/// use verifetch::http::ReqwestTransport;
///
/// let fetcher = FetcherBuilder::new().build(ReqwestTransport::new()?);
/// # Ok(())
/// # }
/// ```
pub struct Fetcher<T: Transport> {
    transport: T,
    config: FetcherConfig,
    progress: Arc<dyn ProgressSink>,
}

impl<T: Transport + fmt::Debug> fmt::Debug for Fetcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Transport> Fetcher<T> {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(
        transport: T,
        config: FetcherConfig,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            transport,
            config,
            progress,
        }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Gets the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `url` into memory.
    ///
    /// With `verbose`, progress is reported to the configured sink after every
    /// receive. With `want_metadata`, the `ETag` and `Content-MD5` headers of
    /// the final response are returned alongside the body.
    pub async fn fetch(
        &self,
        url: &str,
        verbose: bool,
        want_metadata: bool,
    ) -> Result<FetchResult> {
        let request = FetchRequest {
            url: url.to_string(),
            verbose,
            want_metadata,
        };
        self.fetch_request(&request).await
    }

    /// Fetches the resource described by `request`.
    pub async fn fetch_request(&self, request: &FetchRequest) -> Result<FetchResult> {
        let mut url = request.url.clone();
        let mut hops = 0;

        loop {
            let mut context = ContextGuard::open(&self.transport, &url)?;
            context.add_header("User-Agent", USER_AGENT)?;
            context.begin().await?;

            let status = context.status()?;
            debug!("GET {} returned {}", url, status);

            match status {
                200 => return self.receive_body(context, request, status).await,
                300..=399 => {
                    if hops >= self.config.max_redirects {
                        return Err(Error::TooManyRedirects {
                            limit: self.config.max_redirects,
                        });
                    }
                    let location = context
                        .capped_header(LOCATION.as_str(), self.config.location_limit)
                        .ok_or(Error::MissingLocation { status })?;
                    let next = resolve_redirect(&url, &location)?;
                    drop(context);

                    hops += 1;
                    debug!(
                        "Following redirect {} of {} to {}",
                        hops, self.config.max_redirects, next
                    );
                    url = next;
                }
                _ => return Err(Error::Protocol { status }),
            }
        }
    }

    /// Fetches `url` from synchronous code.
    ///
    /// Drives [`Fetcher::fetch`] to completion on a private current-thread
    /// runtime, blocking the calling thread. Must not be called from within
    /// an async runtime.
    pub fn fetch_blocking(
        &self,
        url: &str,
        verbose: bool,
        want_metadata: bool,
    ) -> Result<FetchResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.fetch(url, verbose, want_metadata))
    }

    async fn receive_body(
        &self,
        mut context: ContextGuard<'_, T>,
        request: &FetchRequest,
        status: u16,
    ) -> Result<FetchResult> {
        let metadata = request.want_metadata.then(|| ResponseMetadata {
            etag: context.capped_header(ETAG.as_str(), self.config.header_limit),
            content_hash: context.capped_header(CONTENT_MD5, self.config.header_limit),
        });

        let size = context.size_state()?;
        let mut body = allocate(size.total)?;
        debug!("Allocated {} bytes for {}", size.total, request.url);

        let mut state = TransferState::new(size);
        let outcome = self
            .transfer(&mut context, &mut body, &mut state, request.verbose)
            .await;
        if request.verbose {
            self.progress.finish();
        }
        outcome?;

        debug!("Received {} bytes from {}", state.received(), request.url);
        Ok(FetchResult {
            body,
            size: state.total_size,
            status_code: status,
            metadata,
        })
    }

    async fn transfer(
        &self,
        context: &mut ContextGuard<'_, T>,
        body: &mut [u8],
        state: &mut TransferState,
        verbose: bool,
    ) -> Result<()> {
        while !state.is_done() {
            let filled = state.received() as usize;
            let outcome = context
                .receive(&mut body[filled..], self.config.receive_timeout)
                .await?;
            state.advance(context.size_state()?.offset);

            if verbose {
                self.progress.progress(state.received(), state.total_size);
            }
            if outcome == ReceiveStatus::Complete {
                break;
            }
        }

        if !state.is_done() {
            return Err(Error::IncompleteBody {
                received: state.received(),
                expected: state.total_size,
            });
        }
        Ok(())
    }
}

/// The `Content-MD5` header name; `reqwest` has no constant for it.
const CONTENT_MD5: &str = "Content-MD5";

/// Allocate a zero-filled buffer of exactly `size` bytes.
fn allocate(size: u64) -> Result<Vec<u8>> {
    let len = usize::try_from(size).map_err(|_| Error::OutOfMemory { size })?;
    let mut body = Vec::new();
    body.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory { size })?;
    body.resize(len, 0);
    Ok(body)
}

/// Resolve a `Location` value against the URL that produced it.
fn resolve_redirect(current: &str, location: &str) -> Result<String> {
    let base = Url::parse(current).map_err(|e| {
        Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", current, e))
    })?;
    base.join(location)
        .map(String::from)
        .map_err(|e| {
            Error::InvalidUrl(format!(
                "The redirect target \"{}\" cannot be resolved: {}",
                location, e
            ))
        })
}
