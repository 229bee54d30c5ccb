//! Configuration structures and defaults for the fetcher.

use std::time::Duration;

/// User-Agent sent with every request. Some APIs (GitHub among them) reject
/// requests without one.
pub const USER_AGENT: &str = concat!("verifetch/", env!("CARGO_PKG_VERSION"));

/// Default number of redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default cap on `ETag` and `Content-MD5` values, terminator included.
pub const DEFAULT_HEADER_LIMIT: usize = 512;

/// Default cap on `Location` values, terminator included.
pub const DEFAULT_LOCATION_LIMIT: usize = 1024;

/// Configuration structure for the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Maximum number of redirect hops followed for one fetch.
    pub max_redirects: usize,
    /// Header values of this length or longer are treated as absent.
    pub header_limit: usize,
    /// `Location` values of this length or longer are treated as absent.
    pub location_limit: usize,
    /// Longest time a single receive call may take.
    pub receive_timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            header_limit: DEFAULT_HEADER_LIMIT,
            location_limit: DEFAULT_LOCATION_LIMIT,
            receive_timeout: None,
        }
    }
}
