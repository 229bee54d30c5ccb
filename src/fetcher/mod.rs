//! Fetcher module containing the fetch loop, its builder and configuration.
//!
//! # Overview
//!
//! - `fetcher` - Core [`Fetcher`] with status branching, redirects and body transfer
//! - `builder` - [`FetcherBuilder`] for configuration using the builder pattern
//! - `config` - [`FetcherConfig`] and the fixed User-Agent
//! - `transfer` - Context guard and transfer bookkeeping
//!
//! # Examples
//!
//! ```rust,no_run
//! use verifetch::fetcher::FetcherBuilder;
//! use verifetch::http::ReqwestTransport;
//! use verifetch::Error;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().max_redirects(3).build(ReqwestTransport::new()?);
//!
//! match fetcher.fetch("https://example.com/missing", false, false).await {
//!     Ok(result) => println!("{} bytes", result.size),
//!     Err(Error::Protocol { status }) => println!("server said {}", status),
//!     Err(e) => println!("fetch failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
#[allow(clippy::module_inception)]
pub mod fetcher;
mod transfer;

pub use builder::FetcherBuilder;
pub use config::{FetcherConfig, USER_AGENT};
pub use fetcher::Fetcher;
