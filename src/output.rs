//! Report types produced by a harvest run.
//!
//! Everything here is `Serialize` so the CLI can print a whole run as JSON
//! with `--json`.

use crate::error::DownloadError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to a single extracted URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// Body fetched and written to `path`.
    Downloaded {
        url: String,
        path: PathBuf,
        bytes: u64,
    },
    /// A file with the sanitized name was already present; no request made.
    AlreadyExists { url: String, path: PathBuf },
    /// The request failed; the batch carried on.
    Failed { url: String, error: DownloadError },
}

impl DownloadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadOutcome::Failed { .. })
    }
}

/// Why a file was judged corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorruptReason {
    /// The PDF parser rejected the file.
    Unparseable { detail: String },
    /// The file parsed but contains no pages.
    NoPages,
}

impl std::fmt::Display for CorruptReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorruptReason::Unparseable { detail } => write!(f, "{detail}"),
            CorruptReason::NoPages => write!(f, "no pages"),
        }
    }
}

/// Validation result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Valid { pages: usize },
    Corrupt { reason: CorruptReason },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }
}

/// Sweep result for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    pub path: PathBuf,
    pub verdict: Verdict,
    /// The base file name contains an uppercase character.
    pub uppercase_name: bool,
    /// The file was removed because it was corrupt.
    pub deleted: bool,
}

impl FileCheck {
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Result of the post-download integrity sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub files: Vec<FileCheck>,
}

impl SweepReport {
    pub fn valid(&self) -> usize {
        self.files.iter().filter(|f| f.verdict.is_valid()).count()
    }

    pub fn deleted(&self) -> usize {
        self.files.iter().filter(|f| f.deleted).count()
    }

    pub fn uppercase_notices(&self) -> usize {
        self.files.iter().filter(|f| f.uppercase_name).count()
    }
}

/// Counters for a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HarvestStats {
    /// URLs found in the input, duplicates included.
    pub extracted: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Files examined by the sweep.
    pub checked: usize,
    pub valid: usize,
    pub deleted: usize,
    pub uppercase_notices: usize,
    pub duration_ms: u64,
}

impl HarvestStats {
    pub(crate) fn tally(
        urls: usize,
        downloads: &[DownloadOutcome],
        sweep: &SweepReport,
        duration_ms: u64,
    ) -> Self {
        let mut stats = HarvestStats {
            extracted: urls,
            checked: sweep.files.len(),
            valid: sweep.valid(),
            deleted: sweep.deleted(),
            uppercase_notices: sweep.uppercase_notices(),
            duration_ms,
            ..Default::default()
        };
        for outcome in downloads {
            match outcome {
                DownloadOutcome::Downloaded { .. } => stats.downloaded += 1,
                DownloadOutcome::AlreadyExists { .. } => stats.skipped += 1,
                DownloadOutcome::Failed { .. } => stats.failed += 1,
            }
        }
        stats
    }
}

/// Everything a harvest run produced.
#[derive(Debug, Clone, Serialize)]
pub struct HarvestReport {
    pub urls: Vec<String>,
    pub downloads: Vec<DownloadOutcome>,
    pub sweep: SweepReport,
    pub stats: HarvestStats,
}
