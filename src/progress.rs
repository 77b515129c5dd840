//! Progress-callback trait for per-URL and per-file harvest events.
//!
//! Inject an [`Arc<dyn HarvestProgressCallback>`] via
//! [`crate::config::HarvestConfigBuilder::progress_callback`] to receive
//! events as the pipeline works through the link list and the sweep.
//!
//! The library itself only logs through `tracing`; the human-readable
//! console lines ("Downloaded: …", "Deleted corrupt file: …") are the job of
//! whoever implements this trait. The `pdfharvest` binary renders them
//! above an indicatif progress bar.
//!
//! # Example
//!
//! ```rust
//! use pdf_harvest::{DownloadOutcome, HarvestConfig, HarvestProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct FailureCounter {
//!     failed: AtomicUsize,
//! }
//!
//! impl HarvestProgressCallback for FailureCounter {
//!     fn on_download_complete(&self, _index: usize, _total: usize, outcome: &DownloadOutcome) {
//!         if outcome.is_failed() {
//!             self.failed.fetch_add(1, Ordering::SeqCst);
//!         }
//!     }
//! }
//!
//! let counter = Arc::new(FailureCounter { failed: AtomicUsize::new(0) });
//!
//! let config = HarvestConfig::builder()
//!     .progress_callback(counter as Arc<dyn HarvestProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::output::{DownloadOutcome, FileCheck, HarvestStats};
use std::sync::Arc;

/// Called by the harvest pipeline as it processes each URL and file.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive in pipeline order: URLs in extraction
/// order, files in directory-walk order.
pub trait HarvestProgressCallback: Send + Sync {
    /// Called once after the input text has been scanned for links.
    ///
    /// # Arguments
    /// * `count` — number of URLs found, duplicates included
    fn on_extracted(&self, count: usize) {
        let _ = count;
    }

    /// Called before a URL is looked up on disk or fetched.
    ///
    /// # Arguments
    /// * `index` — 1-indexed position in the URL list
    /// * `total` — number of URLs
    /// * `url`   — the URL about to be processed
    fn on_download_start(&self, index: usize, total: usize, url: &str) {
        let _ = (index, total, url);
    }

    /// Called once a URL has been downloaded, skipped, or has failed.
    fn on_download_complete(&self, index: usize, total: usize, outcome: &DownloadOutcome) {
        let _ = (index, total, outcome);
    }

    /// Called for every file the sweep validated, after any deletion.
    fn on_file_checked(&self, check: &FileCheck) {
        let _ = check;
    }

    /// Called once at the very end of a full run.
    fn on_harvest_complete(&self, stats: &HarvestStats) {
        let _ = stats;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl HarvestProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::HarvestConfig`].
pub type ProgressCallback = Arc<dyn HarvestProgressCallback>;
