//! Validation: classify a downloaded file as a usable PDF or as corrupt.
//!
//! A file is corrupt when the parser rejects it outright (empty file, HTML
//! error page saved under a `.pdf` name, truncated transfer) or when it
//! parses but has no pages. The file is never modified here; deleting
//! corrupt files is the sweep's job.

use crate::output::{CorruptReason, Verdict};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, info};

/// The PDF parsing capability the validator needs: open a file, report
/// why it cannot be parsed, or tell how many pages it has.
pub trait PageCounter {
    fn page_count(&self, path: &Path) -> Result<usize, String>;
}

/// [`PageCounter`] backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfPageCounter;

impl PageCounter for LopdfPageCounter {
    fn page_count(&self, path: &Path) -> Result<usize, String> {
        let document = Document::load(path).map_err(|e| e.to_string())?;
        Ok(document.get_pages().len())
    }
}

/// Validate `path` with the default `lopdf` backend.
pub fn validate_pdf(path: &Path) -> Verdict {
    validate_with(&LopdfPageCounter, path)
}

/// Validate `path` with any [`PageCounter`].
pub fn validate_with<C: PageCounter + ?Sized>(counter: &C, path: &Path) -> Verdict {
    match counter.page_count(path) {
        Ok(0) => {
            info!("Corrupt PDF {}: no pages", path.display());
            Verdict::Corrupt {
                reason: CorruptReason::NoPages,
            }
        }
        Ok(pages) => {
            debug!("Valid PDF {} ({} pages)", path.display(), pages);
            Verdict::Valid { pages }
        }
        Err(detail) => {
            info!("Corrupt PDF {}: {}", path.display(), detail);
            Verdict::Corrupt {
                reason: CorruptReason::Unparseable { detail },
            }
        }
    }
}
