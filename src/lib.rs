//! # pdf-harvest
//!
//! Find PDF links in a text or CSV file, download each one, then sweep the
//! download directory for files that are not usable PDFs.
//!
//! ## Pipeline Overview
//!
//! ```text
//! links.csv
//!  │
//!  ├─ 1. Extract   every https?://….pdf link, in order, duplicates kept
//!  ├─ 2. Sanitize  URL → safe lowercase file name (safety_sheet__2023_.pdf)
//!  ├─ 3. Download  sequential GET into PDFs/, skipping names already on disk
//!  ├─ 4. Scan      walk PDFs/ for *.pdf
//!  ├─ 5. Validate  parse with lopdf; unparseable or zero pages = corrupt
//!  └─ 6. Sweep     delete corrupt files, flag names with uppercase letters
//! ```
//!
//! A failed download is reported and the batch continues. A missing input
//! file, an unwritable output directory, or a corrupt file that cannot be
//! deleted stops the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_harvest::{harvest, HarvestConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HarvestConfig::default(); // downloads into ./PDFs
//!     let report = harvest("links.csv", &config).await?;
//!     eprintln!(
//!         "{} downloaded, {} skipped, {} failed, {} corrupt removed",
//!         report.stats.downloaded,
//!         report.stats.skipped,
//!         report.stats.failed,
//!         report.stats.deleted,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfharvest` binary (clap + anyhow + indicatif + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod harvest;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{HarvestConfig, HarvestConfigBuilder};
pub use error::{DownloadError, HarvestError};
pub use harvest::{download_all, harvest, harvest_sync};
pub use output::{
    CorruptReason, DownloadOutcome, FileCheck, HarvestReport, HarvestStats, SweepReport, Verdict,
};
pub use pipeline::download::download_pdf;
pub use pipeline::extract::{extract_pdf_urls, extract_pdf_urls_with};
pub use pipeline::sanitize::url_to_filename;
pub use pipeline::scan::find_files;
pub use pipeline::sweep::{has_uppercase, sweep, sweep_directory};
pub use pipeline::validate::{validate_pdf, LopdfPageCounter, PageCounter};
pub use progress::{HarvestProgressCallback, NoopProgressCallback, ProgressCallback};
