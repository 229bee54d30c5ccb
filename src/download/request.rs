//! The request handed to the fetcher.

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;

/// Describes one fetch: where to go and what to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute URL of the resource.
    pub url: String,
    /// Report transfer progress to the fetcher's progress sink.
    pub verbose: bool,
    /// Collect the `ETag` and `Content-MD5` response headers.
    pub want_metadata: bool,
}

impl FetchRequest {
    /// Creates a quiet request without metadata.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            verbose: false,
            want_metadata: false,
        }
    }

    /// Report transfer progress.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Collect response metadata.
    pub fn with_metadata(mut self, want_metadata: bool) -> Self {
        self.want_metadata = want_metadata;
        self
    }
}

impl TryFrom<&str> for FetchRequest {
    type Error = Error;

    /// Validates that `value` is an absolute URL before building the request.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map(|u| FetchRequest::new(u.as_str()))
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
    }
}

impl From<&Url> for FetchRequest {
    fn from(value: &Url) -> Self {
        FetchRequest::new(value.as_str())
    }
}
