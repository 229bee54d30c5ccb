//! Error handling for the verifetch library.
//!
//! This module provides the centralized error type returned by every fallible
//! fetch operation. Hash verification never fails: a mismatch is a normal
//! `false` result, so it has no variant here.

use std::fmt;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::http::Transport) step.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The transport step that was running when a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStep {
    /// Opening the request context.
    Open,
    /// Adding a request header.
    AddHeader,
    /// Sending the request.
    Begin,
    /// Reading the response status code.
    Status,
    /// Querying the transfer offset and total size.
    SizeQuery,
    /// Receiving body data.
    Receive,
}

impl fmt::Display for TransportStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportStep::Open => "open",
            TransportStep::AddHeader => "add-header",
            TransportStep::Begin => "begin",
            TransportStep::Status => "status",
            TransportStep::SizeQuery => "size-query",
            TransportStep::Receive => "receive",
        };
        f.write_str(name)
    }
}

/// Errors that can happen while fetching a resource.
#[derive(Error, Debug)]
pub enum Error {
    /// A transport step failed.
    ///
    /// Carries the failing step and the error reported by the transport.
    #[error("Transport error during {step}: {source}")]
    Transport {
        step: TransportStep,
        #[source]
        source: TransportError,
    },

    /// The server answered with a status that is neither 200 nor a redirect.
    #[error("Unexpected HTTP status {status}")]
    Protocol { status: u16 },

    /// The body buffer could not be allocated.
    #[error("Could not allocate {size} bytes for the response body")]
    OutOfMemory { size: u64 },

    /// The redirect chain was longer than the configured bound.
    #[error("Too many redirects (limit: {limit})")]
    TooManyRedirects { limit: usize },

    /// A redirect response had no usable `Location` header.
    #[error("Redirect status {status} without a usable Location header")]
    MissingLocation { status: u16 },

    /// A URL (initial or redirect target) could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The transport finished before the announced size was received.
    #[error("Transfer ended after {received} of {expected} bytes")]
    IncompleteBody { received: u64, expected: u64 },

    /// A single receive call made no progress within the configured bound.
    #[error("Transfer stalled for {after:?}")]
    Stalled { after: Duration },

    /// The runtime backing a blocking fetch could not be created.
    #[error("Runtime error")]
    Runtime {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Wrap a transport failure with the step it happened in.
    pub fn transport(step: TransportStep, source: TransportError) -> Self {
        Error::Transport { step, source }
    }

    /// Return the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol { status } | Error::MissingLocation { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for operations that can fail with a verifetch error.
pub type Result<T> = std::result::Result<T, Error>;
