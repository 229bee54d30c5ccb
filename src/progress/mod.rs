//! Progress module containing the progress sink seam and its implementations.
//!
//! # Overview
//!
//! - `sink` - The [`ProgressSink`] trait, plus [`NoProgress`] and [`LogProgress`]
//! - `style` - Progress bar styling options and templates
//! - `display` - [`ProgressBarSink`], an `indicatif` backed sink
//!
//! Any `Fn(u64, u64) + Send + Sync` closure is a sink as well.
//!
//! # Examples
//!
//! ```rust
//! use verifetch::fetcher::FetcherBuilder;
//! use verifetch::progress::{ProgressBarOpts, ProgressBarSink};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = verifetch::http::ReqwestTransport::new()?;
//! let fetcher = FetcherBuilder::new()
//!     .progress(ProgressBarSink::new(ProgressBarOpts::with_pip_style()))
//!     .build(transport);
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub(crate) mod sink;
pub(crate) mod style;

pub use display::ProgressBarSink;
pub use sink::{LogProgress, NoProgress, ProgressSink};
pub use style::ProgressBarOpts;
