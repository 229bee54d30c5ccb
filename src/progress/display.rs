//! Terminal progress bar sink.
//!
//! # Examples
//!
//! ```rust
//! use verifetch::progress::{ProgressBarOpts, ProgressBarSink, ProgressSink};
//!
//! let sink = ProgressBarSink::new(ProgressBarOpts::hidden());
//! sink.progress(512, 1024);
//! assert_eq!(sink.bar().position(), 512);
//! sink.finish();
//! ```

use super::sink::ProgressSink;
use super::style::ProgressBarOpts;
use indicatif::ProgressBar;

/// Draws fetch progress with an `indicatif` bar.
///
/// The bar length is learned from the first notification, since the total
/// size is only known once the response head has arrived.
#[derive(Clone)]
pub struct ProgressBarSink {
    bar: ProgressBar,
    clear: bool,
}

impl ProgressBarSink {
    /// Create a sink from bar options.
    pub fn new(opts: ProgressBarOpts) -> Self {
        let clear = opts.clear;
        Self {
            bar: opts.to_progress_bar(0),
            clear,
        }
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new(ProgressBarOpts::default())
    }
}

impl ProgressSink for ProgressBarSink {
    fn progress(&self, received: u64, total: u64) {
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.set_position(received);
    }

    fn finish(&self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}
