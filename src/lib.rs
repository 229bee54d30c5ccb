//! Verifetch downloads HTTP resources fully into memory, following
//! redirects and reporting progress, and verifies the result against the
//! server's `Content-MD5` hash.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use verifetch::{check_hash, FetcherBuilder, ReqwestTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().build(ReqwestTransport::new()?);
//! let result = fetcher
//!     .fetch("https://example.com/release.zip", true, true)
//!     .await?;
//!
//! if let Some(hash) = result.content_hash() {
//!     if !check_hash(hash, &result.body, result.body.len()) {
//!         eprintln!("Download corrupted");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - Request and result types, and hash verification
//! - [`fetcher`] - The [`Fetcher`] and [`FetcherBuilder`]
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - The [`Transport`] seam and its `reqwest` implementation
//! - [`progress`] - Progress sinks, including an `indicatif` progress bar

pub mod download;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod progress;

pub use download::hash::{check_hash, content_md5, HashCheckInput};
pub use download::{FetchRequest, FetchResult, ResponseMetadata};
pub use error::{Error, Result, TransportStep};
pub use fetcher::{Fetcher, FetcherBuilder, FetcherConfig};
pub use http::{HttpClientConfig, ReceiveStatus, ReqwestTransport, SizeState, Transport};
pub use progress::{LogProgress, NoProgress, ProgressBarOpts, ProgressBarSink, ProgressSink};
