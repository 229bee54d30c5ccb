//! Transport abstraction driven by the [`Fetcher`](crate::fetcher::Fetcher).
//!
//! A transport exposes the lifecycle of one HTTP GET request as a set of
//! small steps operating on a request context: open, add headers, begin,
//! inspect the status and headers, query the transfer size, receive the body
//! and close. The fetcher owns the protocol logic (status branching, redirect
//! chasing, buffer management); a transport only moves bytes.
//!
//! # Implementations
//!
//! - [`ReqwestTransport`](crate::http::ReqwestTransport): production implementation using `reqwest`
//! - Scripted implementations for testing
//!
//! # Example
//!
//! ```rust,no_run
//! use verifetch::http::{ReceiveStatus, ReqwestTransport, Transport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let transport = ReqwestTransport::new()?;
//! let mut context = transport.open("https://example.com/file.zip")?;
//! transport.begin(&mut context).await?;
//! println!("status: {}", transport.status(&context)?);
//!
//! let size = transport.size_state(&context)?;
//! let mut buf = vec![0u8; size.total as usize];
//! let mut pos = 0;
//! while pos < buf.len() {
//!     let status = transport.receive(&mut context, &mut buf[pos..]).await?;
//!     pos = transport.size_state(&context)?.offset as usize;
//!     if status == ReceiveStatus::Complete {
//!         break;
//!     }
//! }
//! transport.close(context);
//! # Ok(())
//! # }
//! ```

use crate::error::TransportError;
use std::future::Future;

/// Result type returned by every fallible transport step.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Position of the body transfer as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeState {
    /// Number of body bytes the transport has delivered so far.
    pub offset: u64,
    /// Total number of body bytes announced by the server.
    pub total: u64,
}

/// Outcome of a single [`Transport::receive`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveStatus {
    /// More data may follow.
    Pending,
    /// The body has been fully delivered.
    Complete,
}

/// Minimal HTTP transport capability used by the fetcher.
///
/// Every request gets its own [`Transport::Context`]; implementations must not
/// share mutable state between contexts. [`Transport::close`] is synchronous
/// so that a context can be released from a drop guard on any exit path.
pub trait Transport: Send + Sync {
    /// Live state of one in-flight request.
    type Context: Send;

    /// Open a GET request context for `url`.
    fn open(&self, url: &str) -> TransportResult<Self::Context>;

    /// Add a request header to a context that has not been sent yet.
    fn add_header(
        &self,
        context: &mut Self::Context,
        name: &str,
        value: &str,
    ) -> TransportResult<()>;

    /// Send the request and wait for the response head.
    fn begin(
        &self,
        context: &mut Self::Context,
    ) -> impl Future<Output = TransportResult<()>> + Send;

    /// Read the response status code.
    fn status(&self, context: &Self::Context) -> TransportResult<u16>;

    /// Read a response header by name.
    ///
    /// Returns `None` when the header is absent or not valid text.
    fn header(&self, context: &Self::Context, name: &str) -> Option<String>;

    /// Query the current transfer offset and the total body size.
    fn size_state(&self, context: &Self::Context) -> TransportResult<SizeState>;

    /// Receive body data into `buf`.
    ///
    /// The transport may fill only part of `buf`; the caller learns how much
    /// arrived through [`Transport::size_state`].
    fn receive(
        &self,
        context: &mut Self::Context,
        buf: &mut [u8],
    ) -> impl Future<Output = TransportResult<ReceiveStatus>> + Send;

    /// Release the context and any connection it holds.
    fn close(&self, context: Self::Context);
}
