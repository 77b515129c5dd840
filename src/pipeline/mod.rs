//! Pipeline stages for a harvest run.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own and the sweep can run without the download half.
//!
//! ## Data Flow
//!
//! ```text
//! extract ──▶ sanitize + download ──▶ scan ──▶ validate ──▶ sweep
//! (regex)     (per URL, sequential)   (walk)   (lopdf)      (delete/notice)
//! ```
//!
//! 1. [`extract`]  — find `http(s)://….pdf` links in the input text
//! 2. [`sanitize`] — map each URL to a deterministic local file name
//! 3. [`download`] — fetch into the output directory unless already present;
//!    the only stage with network I/O
//! 4. [`scan`]     — recursively list files with the configured suffix
//! 5. [`validate`] — parse each file and count its pages
//! 6. [`sweep`]    — delete corrupt files, flag uppercase file names

pub mod download;
pub mod extract;
pub mod sanitize;
pub mod scan;
pub mod sweep;
pub mod validate;
