//! Error types for the pdf-harvest library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`HarvestError`] — **Fatal**: the run cannot proceed (input file
//!   missing, output directory not writable, a corrupt file that cannot be
//!   deleted). Returned as `Err(HarvestError)` from the pipeline entry points.
//!
//! * [`DownloadError`] — **Non-fatal**: a single URL failed (connection
//!   refused, HTTP 404, body cut off mid-stream). Stored inside
//!   [`crate::output::DownloadOutcome::Failed`] so one bad link never aborts
//!   the batch.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf-harvest library.
///
/// Per-URL network failures use [`DownloadError`] and are stored in
/// [`crate::output::DownloadOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum HarvestError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The source text file does not exist.
    #[error("Input file not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// The source text file exists but could not be read as UTF-8 text.
    #[error("Failed to read input file '{path}': {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Filesystem errors ─────────────────────────────────────────────────
    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A downloaded file could not be written to disk.
    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corrupt file could not be removed during the sweep.
    #[error("Failed to delete corrupt file '{path}': {source}\nRe-run with --keep-going-on-delete-error to skip it.")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the output directory failed part-way.
    #[error("Failed to scan '{path}': {detail}")]
    ScanFailed { path: PathBuf, detail: String },

    // ── Setup errors ──────────────────────────────────────────────────────
    /// The HTTP client could not be constructed (TLS backend init, etc.).
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single URL.
///
/// The batch continues with the next URL; the error is reported and kept
/// in the run report.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
pub enum DownloadError {
    /// Connection, DNS, TLS or redirect failure before a response arrived.
    #[error("request failed: {detail}")]
    Request { detail: String },

    /// The configured download timeout elapsed.
    #[error("timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The server answered with a non-success status code.
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response body stream broke off before completion.
    #[error("body read failed: {detail}")]
    Body { detail: String },
}

impl DownloadError {
    /// Classify a transport error from reqwest.
    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_secs: Option<u64>) -> Self {
        if err.is_timeout() {
            return DownloadError::Timeout {
                secs: timeout_secs.unwrap_or(0),
            };
        }
        if let Some(status) = err.status() {
            return DownloadError::HttpStatus {
                status: status.as_u16(),
            };
        }
        if err.is_body() || err.is_decode() {
            return DownloadError::Body {
                detail: err.to_string(),
            };
        }
        DownloadError::Request {
            detail: err.to_string(),
        }
    }
}
