//! Request context guard and body transfer bookkeeping.

use crate::error::{Error, Result, TransportStep};
use crate::http::{ReceiveStatus, SizeState, Transport};

use std::time::Duration;
use tracing::{trace, warn};

/// Owns an open transport context and closes it when dropped.
///
/// Dropping happens on every exit path of a fetch: success, a followed
/// redirect, an error returned with `?`, or the fetch future being dropped.
pub(crate) struct ContextGuard<'t, T: Transport> {
    transport: &'t T,
    context: Option<T::Context>,
}

impl<'t, T: Transport> ContextGuard<'t, T> {
    pub(crate) fn open(transport: &'t T, url: &str) -> Result<Self> {
        let context = transport
            .open(url)
            .map_err(|e| Error::transport(TransportStep::Open, e))?;
        Ok(Self {
            transport,
            context: Some(context),
        })
    }

    fn get(&self) -> &T::Context {
        self.context
            .as_ref()
            .expect("context is only taken on drop")
    }

    fn get_mut(&mut self) -> &mut T::Context {
        self.context
            .as_mut()
            .expect("context is only taken on drop")
    }

    pub(crate) fn add_header(&mut self, name: &str, value: &str) -> Result<()> {
        let transport = self.transport;
        transport
            .add_header(self.get_mut(), name, value)
            .map_err(|e| Error::transport(TransportStep::AddHeader, e))
    }

    pub(crate) async fn begin(&mut self) -> Result<()> {
        let transport = self.transport;
        transport
            .begin(self.get_mut())
            .await
            .map_err(|e| Error::transport(TransportStep::Begin, e))
    }

    pub(crate) fn status(&self) -> Result<u16> {
        self.transport
            .status(self.get())
            .map_err(|e| Error::transport(TransportStep::Status, e))
    }

    /// Read a header, treating values of `limit` bytes or more as absent.
    pub(crate) fn capped_header(&self, name: &str, limit: usize) -> Option<String> {
        let value = self.transport.header(self.get(), name)?;
        if value.len() >= limit {
            warn!(
                "Ignoring {} header of {} bytes (limit {})",
                name,
                value.len(),
                limit
            );
            return None;
        }
        Some(value)
    }

    pub(crate) fn size_state(&self) -> Result<SizeState> {
        self.transport
            .size_state(self.get())
            .map_err(|e| Error::transport(TransportStep::SizeQuery, e))
    }

    /// Receive into `buf`, failing with [`Error::Stalled`] past `timeout`.
    pub(crate) async fn receive(
        &mut self,
        buf: &mut [u8],
        timeout: Option<Duration>,
    ) -> Result<ReceiveStatus> {
        let transport = self.transport;
        let receive = transport.receive(self.get_mut(), buf);
        let outcome = match timeout {
            Some(after) => tokio::time::timeout(after, receive)
                .await
                .map_err(|_| Error::Stalled { after })?,
            None => receive.await,
        };
        outcome.map_err(|e| Error::transport(TransportStep::Receive, e))
    }
}

impl<T: Transport> Drop for ContextGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(context) = self.context.take() {
            trace!("Closing request context");
            self.transport.close(context);
        }
    }
}

/// Progress of one body transfer.
///
/// `bytes_received_so_far` is the absolute transport offset and never moves
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransferState {
    pub(crate) total_size: u64,
    pub(crate) bytes_received_so_far: u64,
    pub(crate) start_offset: u64,
}

impl TransferState {
    pub(crate) fn new(size: SizeState) -> Self {
        Self {
            total_size: size.total,
            bytes_received_so_far: size.offset,
            start_offset: size.offset,
        }
    }

    /// Record the offset reported after a receive call.
    pub(crate) fn advance(&mut self, offset: u64) {
        self.bytes_received_so_far = self.bytes_received_so_far.max(offset);
    }

    /// Body bytes received by this transfer, capped at the total size.
    pub(crate) fn received(&self) -> u64 {
        self.bytes_received_so_far
            .saturating_sub(self.start_offset)
            .min(self.total_size)
    }

    pub(crate) fn is_done(&self) -> bool {
        self.bytes_received_so_far.saturating_sub(self.start_offset) >= self.total_size
    }
}
