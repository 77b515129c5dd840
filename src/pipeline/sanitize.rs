//! Filename sanitisation: map a URL to a safe, deterministic local name.
//!
//! The last path segment of the URL becomes the file name. The path is read
//! from the raw URL text, with no percent-decoding and no `.`/`..`
//! normalisation, so the result depends only on the characters the link
//! list contains. Input without a `scheme://` prefix is treated as a bare
//! path, which makes the function idempotent on its own output.

/// Stem used when the URL path ends in `/` or the segment is just `.pdf`.
const FALLBACK_STEM: &str = "download";

const PDF_SUFFIX: &str = ".pdf";

/// Convert a URL to a sanitized file name of the form `^[a-z0-9_-]+\.pdf$`.
///
/// 1. Take the last path segment.
/// 2. Append `.pdf` unless it already ends with exactly that.
/// 3. Replace every stem character outside `[A-Za-z0-9_-]` with `_`.
/// 4. Lower-case the result.
///
/// ```rust
/// use pdf_harvest::url_to_filename;
///
/// assert_eq!(
///     url_to_filename("https://example.com/Docs/Safety Sheet (2023).pdf"),
///     "safety_sheet__2023_.pdf"
/// );
/// ```
pub fn url_to_filename(url: &str) -> String {
    let segment = last_path_segment(url);

    let stem = segment.strip_suffix(PDF_SUFFIX).unwrap_or(segment);

    let mut name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        name.push_str(FALLBACK_STEM);
    }
    name.push_str(PDF_SUFFIX);
    name
}

/// The final `/`-separated segment of the URL's path component.
fn last_path_segment(url: &str) -> &str {
    let path = match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match rest.find(['/', '?', '#']) {
                Some(i) if rest.as_bytes()[i] == b'/' => &rest[i..],
                _ => "",
            }
        }
        None => url,
    };
    let path = match path.find(['?', '#']) {
        Some(i) => &path[..i],
        None => path,
    };
    path.rsplit('/').next().unwrap_or("")
}
