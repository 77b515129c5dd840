//! URL extraction: pull PDF links out of arbitrary text.
//!
//! The input is treated as unstructured text, so a CSV cell, a Markdown link
//! or a bare sentence all work the same. A link is `http://` or `https://`,
//! then the shortest run of non-whitespace that ends in `.pdf` at a word
//! boundary.
//!
//! The lazy quantifier matters: `https://a/x.pdf/more` yields
//! `https://a/x.pdf`, and `https://a/x.pdf,` yields the link without the
//! comma. Only a lowercase `.pdf` matches unless the case-insensitive
//! variant is requested.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_PDF_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+?\.pdf\b").expect("valid PDF URL regex"));

static RE_PDF_URL_ANY_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+?\.(?i:pdf)\b").expect("valid PDF URL regex"));

/// Extract every PDF URL in `text`, in order of appearance, duplicates kept.
pub fn extract_pdf_urls(text: &str) -> Vec<String> {
    extract_pdf_urls_with(text, false)
}

/// Like [`extract_pdf_urls`], optionally accepting `.PDF`, `.Pdf`, ….
pub fn extract_pdf_urls_with(text: &str, match_uppercase_extension: bool) -> Vec<String> {
    let re = if match_uppercase_extension {
        &*RE_PDF_URL_ANY_CASE
    } else {
        &*RE_PDF_URL
    };
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
