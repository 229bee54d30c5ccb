//! Progress notification seam.
//!
//! In verbose mode the fetcher reports `(bytes_received, total_bytes)` after
//! every receive call. What happens with those numbers is up to the sink.

use tracing::{debug, info};

/// Receives transfer progress from the fetcher.
pub trait ProgressSink: Send + Sync {
    /// Called after every receive iteration of a verbose fetch.
    fn progress(&self, received: u64, total: u64);

    /// Called once when a verbose transfer has ended, successfully or not.
    fn finish(&self) {}
}

impl<F> ProgressSink for F
where
    F: Fn(u64, u64) + Send + Sync,
{
    fn progress(&self, received: u64, total: u64) {
        self(received, total)
    }
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&self, _received: u64, _total: u64) {}
}

/// Emits progress as `tracing` events.
///
/// Intermediate notifications are `debug` events; only the one that completes
/// the body is logged at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn progress(&self, received: u64, total: u64) {
        if received >= total {
            info!("Download complete: {} / {}", received, total);
        } else {
            debug!("Download progress: {} / {}", received, total);
        }
    }
}
