//! Directory scan: recursively collect files with a given suffix.

use crate::error::HarvestError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Return absolute paths of every regular file under `root` whose name ends
/// with `suffix` (case-sensitive), at any depth.
///
/// Entries are visited in file-name order within each directory. Symbolic
/// links are not followed. The first walk error aborts the scan.
pub fn find_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, HarvestError> {
    let root = std::path::absolute(root).map_err(|e| HarvestError::ScanFailed {
        path: root.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut found = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| HarvestError::ScanFailed {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone()),
            detail: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            found.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} '{}' files under {}", found.len(), suffix, root.display());
    Ok(found)
}
