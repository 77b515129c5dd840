//! Cleanup and report: delete corrupt files, flag uppercase file names.
//!
//! Every scanned file is validated. Corrupt files are deleted (unless the
//! run is a dry run). Independently of the verdict, a file whose base name
//! contains an uppercase character gets a notice; nothing is renamed.
//!
//! A deletion failure is fatal by default. With
//! `delete_errors_fatal = false` it is logged, the file stays, and the sweep
//! moves on.

use crate::config::HarvestConfig;
use crate::error::HarvestError;
use crate::output::{file_name_of, FileCheck, SweepReport};
use crate::pipeline::scan::find_files;
use crate::pipeline::validate::{validate_with, LopdfPageCounter, PageCounter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// True if any character of `name` is uppercase.
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// Scan `config.output_dir` for `config.extension` files and sweep them.
pub fn sweep_directory(config: &HarvestConfig) -> Result<SweepReport, HarvestError> {
    let paths = find_files(&config.output_dir, &config.extension)?;
    sweep(&paths, config)
}

/// Validate, clean up and report on `paths` with the `lopdf` backend.
pub fn sweep(paths: &[PathBuf], config: &HarvestConfig) -> Result<SweepReport, HarvestError> {
    sweep_with(&LopdfPageCounter, paths, config)
}

/// Like [`sweep`], with a caller-supplied PDF backend.
pub fn sweep_with<C: PageCounter + ?Sized>(
    counter: &C,
    paths: &[PathBuf],
    config: &HarvestConfig,
) -> Result<SweepReport, HarvestError> {
    let mut report = SweepReport::default();

    for path in paths {
        let uppercase_name = has_uppercase(&file_name_of(path));
        if uppercase_name {
            info!("Filename contains uppercase letters: {}", path.display());
        }

        let verdict = validate_with(counter, path);
        let deleted = if verdict.is_valid() || config.dry_run {
            false
        } else {
            remove_corrupt(path, config.delete_errors_fatal)?
        };

        let check = FileCheck {
            path: path.clone(),
            verdict,
            uppercase_name,
            deleted,
        };
        if let Some(ref cb) = config.progress_callback {
            cb.on_file_checked(&check);
        }
        report.files.push(check);
    }

    info!(
        "Sweep complete: {} checked, {} valid, {} deleted",
        report.files.len(),
        report.valid(),
        report.deleted()
    );
    Ok(report)
}

fn remove_corrupt(path: &Path, fatal: bool) -> Result<bool, HarvestError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!("Deleted corrupt file: {}", path.display());
            Ok(true)
        }
        Err(e) if fatal => Err(HarvestError::DeleteFailed {
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e) => {
            warn!("Could not delete corrupt file {}: {}", path.display(), e);
            Ok(false)
        }
    }
}
