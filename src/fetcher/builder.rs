//! Builder pattern implementation for creating Fetcher instances.
//!
//! # Examples
//!
//! ```rust
//! use verifetch::fetcher::FetcherBuilder;
//! use verifetch::http::ReqwestTransport;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new()
//!     .max_redirects(5)
//!     .receive_timeout(Duration::from_secs(30))
//!     .progress(|received: u64, total: u64| println!("{}/{}", received, total))
//!     .build(ReqwestTransport::new()?);
//! # Ok(())
//! # }
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::http::Transport;
use crate::progress::{LogProgress, ProgressSink};

use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Fetcher`].
///
/// Progress goes to [`LogProgress`] unless another sink is set.
pub struct FetcherBuilder {
    config: FetcherConfig,
    progress: Arc<dyn ProgressSink>,
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self {
            config: FetcherConfig::default(),
            progress: Arc::new(LogProgress),
        }
    }
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FetcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of redirect hops.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Set the length at which `ETag` and `Content-MD5` values are dropped.
    pub fn header_limit(mut self, header_limit: usize) -> Self {
        self.config.header_limit = header_limit;
        self
    }

    /// Set the length at which a `Location` value is dropped.
    pub fn location_limit(mut self, location_limit: usize) -> Self {
        self.config.location_limit = location_limit;
        self
    }

    /// Fail a fetch whose single receive call takes longer than `timeout`.
    pub fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.config.receive_timeout = Some(timeout);
        self
    }

    /// Set the sink notified during verbose fetches.
    pub fn progress<P>(mut self, progress: P) -> Self
    where
        P: ProgressSink + 'static,
    {
        self.progress = Arc::new(progress);
        self
    }

    /// Create the [`Fetcher`] around `transport`.
    pub fn build<T: Transport>(self, transport: T) -> Fetcher<T> {
        Fetcher::new(transport, self.config, self.progress)
    }
}
