//! Pipeline entry points.
//!
//! [`harvest`] runs the whole thing: read the link list, download every PDF
//! it mentions, then sweep the output directory. [`download_all`] and
//! [`crate::pipeline::sweep::sweep_directory`] run the two halves on their
//! own.
//!
//! Everything is sequential. URLs are fetched one at a time in the order
//! they appear in the input, so a duplicate link always hits the
//! "already exists" path of the first copy.

use crate::config::HarvestConfig;
use crate::error::HarvestError;
use crate::output::{DownloadOutcome, HarvestReport, HarvestStats};
use crate::pipeline::{download, extract, sweep};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Read `input_path`, download every PDF link in it, then sweep.
///
/// # Errors
/// Returns `Err(HarvestError)` only for fatal errors:
/// - input file missing or unreadable
/// - output directory cannot be created or written
/// - a corrupt file cannot be deleted (unless `delete_errors_fatal` is off)
///
/// Individual download failures are reported in
/// [`HarvestReport::downloads`] and never abort the run.
pub async fn harvest(
    input_path: impl AsRef<Path>,
    config: &HarvestConfig,
) -> Result<HarvestReport, HarvestError> {
    let start = Instant::now();
    let input_path = input_path.as_ref();

    // ── Step 1: Read input ───────────────────────────────────────────────
    let text = read_input(input_path).await?;

    // ── Step 2: Extract URLs ─────────────────────────────────────────────
    info!("Extracting PDF URLs from {}", input_path.display());
    let urls = extract::extract_pdf_urls_with(&text, config.match_uppercase_extension);
    info!("Extracted {} PDF URLs", urls.len());
    if let Some(ref cb) = config.progress_callback {
        cb.on_extracted(urls.len());
    }

    // ── Step 3: Download ─────────────────────────────────────────────────
    download::ensure_output_dir(&config.output_dir).await?;
    let downloads = download_all(&urls, config).await?;

    // ── Step 4: Sweep ────────────────────────────────────────────────────
    let sweep = sweep::sweep_directory(config)?;

    let stats = HarvestStats::tally(
        urls.len(),
        &downloads,
        &sweep,
        start.elapsed().as_millis() as u64,
    );
    info!(
        "Harvest complete: {} downloaded, {} skipped, {} failed, {} corrupt deleted in {}ms",
        stats.downloaded, stats.skipped, stats.failed, stats.deleted, stats.duration_ms
    );
    if let Some(ref cb) = config.progress_callback {
        cb.on_harvest_complete(&stats);
    }

    Ok(HarvestReport {
        urls,
        downloads,
        sweep,
        stats,
    })
}

/// Download each URL in order, one at a time.
///
/// Returns one [`DownloadOutcome`] per input URL, in the same order.
pub async fn download_all(
    urls: &[String],
    config: &HarvestConfig,
) -> Result<Vec<DownloadOutcome>, HarvestError> {
    let client = config.http_client()?;
    let total = urls.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        let index = i + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_download_start(index, total, url);
        }
        debug!("[{}/{}] {}", index, total, url);

        let outcome = download::download_pdf(&client, url, config).await?;

        if let Some(ref cb) = config.progress_callback {
            cb.on_download_complete(index, total, &outcome);
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Synchronous wrapper around [`harvest`].
///
/// Creates a single-threaded tokio runtime internally.
pub fn harvest_sync(
    input_path: impl AsRef<Path>,
    config: &HarvestConfig,
) -> Result<HarvestReport, HarvestError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| HarvestError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(harvest(input_path, config))
}

async fn read_input(path: &Path) -> Result<String, HarvestError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(HarvestError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(HarvestError::InputUnreadable {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarvestConfig::builder()
            .output_dir(dir.path().join("PDFs"))
            .build()
            .unwrap();

        let err = harvest(dir.path().join("nope.csv"), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, HarvestError::InputNotFound { .. }), "got: {err:?}");
        assert!(!dir.path().join("PDFs").exists(), "nothing created on fatal input error");
    }

    #[tokio::test]
    async fn input_without_links_still_sweeps() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("PDFs");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("Stale.pdf"), b"not really a pdf").unwrap();
        let input = dir.path().join("links.csv");
        std::fs::write(&input, "name,link\nhome,https://example.com/\n").unwrap();

        let config = HarvestConfig::builder().output_dir(&out).build().unwrap();
        let report = harvest(&input, &config).await.unwrap();

        assert!(report.urls.is_empty());
        assert!(report.downloads.is_empty());
        assert_eq!(report.stats.checked, 1);
        assert_eq!(report.stats.deleted, 1);
        assert_eq!(report.stats.uppercase_notices, 1);
        assert!(!out.join("Stale.pdf").exists());
    }

    #[test]
    fn sync_wrapper_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarvestConfig::builder()
            .output_dir(dir.path().join("PDFs"))
            .build()
            .unwrap();
        assert!(harvest_sync(dir.path().join("nope.csv"), &config).is_err());
    }
}
