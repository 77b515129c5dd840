//! Configuration types for a harvest run.
//!
//! Every knob lives in [`HarvestConfig`], built via its
//! [`HarvestConfigBuilder`]. The defaults reproduce the classic behaviour:
//! files go to `PDFs/`, bodies are written in 8 KiB blocks, only lowercase
//! `.pdf` links are picked up, and a corrupt file that cannot be deleted
//! stops the run.

use crate::error::HarvestError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "PDFs";

/// Default write-buffer size for streamed response bodies.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Default suffix collected by the post-download sweep.
pub const DEFAULT_EXTENSION: &str = ".pdf";

const MIN_CHUNK_SIZE: usize = 512;

/// Configuration for a harvest run.
///
/// Built via [`HarvestConfig::builder()`] or using
/// [`HarvestConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf_harvest::HarvestConfig;
///
/// let config = HarvestConfig::builder()
///     .output_dir("downloads")
///     .chunk_size(16 * 1024)
///     .dry_run(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.chunk_size, 16 * 1024);
/// ```
#[derive(Clone)]
pub struct HarvestConfig {
    /// Directory every PDF is downloaded into and swept afterwards. Default: `PDFs`.
    pub output_dir: PathBuf,

    /// Write-buffer size in bytes for response bodies. Default: 8192.
    pub chunk_size: usize,

    /// File-name suffix the sweep collects. Default: `.pdf`.
    pub extension: String,

    /// Per-request timeout in seconds. Default: `None` (reqwest's default, no timeout).
    pub download_timeout_secs: Option<u64>,

    /// Also extract links ending in `.PDF`, `.Pdf`, ... Default: false.
    ///
    /// Off by default so existing link lists yield exactly the same URLs.
    pub match_uppercase_extension: bool,

    /// Abort the run when a corrupt file cannot be deleted. Default: true.
    pub delete_errors_fatal: bool,

    /// Validate and report, but never delete. Default: false.
    pub dry_run: bool,

    /// Pre-built HTTP client. Takes precedence over `download_timeout_secs`.
    pub client: Option<reqwest::Client>,

    /// Receives console-level events as the run progresses.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chunk_size: DEFAULT_CHUNK_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            download_timeout_secs: None,
            match_uppercase_extension: false,
            delete_errors_fatal: true,
            dry_run: false,
            client: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for HarvestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarvestConfig")
            .field("output_dir", &self.output_dir)
            .field("chunk_size", &self.chunk_size)
            .field("extension", &self.extension)
            .field("download_timeout_secs", &self.download_timeout_secs)
            .field("match_uppercase_extension", &self.match_uppercase_extension)
            .field("delete_errors_fatal", &self.delete_errors_fatal)
            .field("dry_run", &self.dry_run)
            .field("client", &self.client.as_ref().map(|_| "<reqwest::Client>"))
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn HarvestProgressCallback>"),
            )
            .finish()
    }
}

impl HarvestConfig {
    /// Create a new builder for `HarvestConfig`.
    pub fn builder() -> HarvestConfigBuilder {
        HarvestConfigBuilder {
            config: Self::default(),
        }
    }

    /// Return the configured client, or build one honouring the timeout.
    pub fn http_client(&self) -> Result<reqwest::Client, HarvestError> {
        if let Some(ref client) = self.client {
            return Ok(client.clone());
        }
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.download_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        builder
            .build()
            .map_err(|e| HarvestError::HttpClient(e.to_string()))
    }
}

/// Builder for [`HarvestConfig`].
#[derive(Debug)]
pub struct HarvestConfigBuilder {
    config: HarvestConfig,
}

impl HarvestConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.config.chunk_size = bytes.max(MIN_CHUNK_SIZE);
        self
    }

    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.config.extension = ext.into();
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.config.download_timeout_secs = Some(secs);
        self
    }

    pub fn match_uppercase_extension(mut self, v: bool) -> Self {
        self.config.match_uppercase_extension = v;
        self
    }

    pub fn delete_errors_fatal(mut self, v: bool) -> Self {
        self.config.delete_errors_fatal = v;
        self
    }

    pub fn dry_run(mut self, v: bool) -> Self {
        self.config.dry_run = v;
        self
    }

    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.config.client = Some(client);
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<HarvestConfig, HarvestError> {
        let c = &self.config;
        if c.output_dir.as_os_str().is_empty() {
            return Err(HarvestError::InvalidConfig(
                "output directory must not be empty".into(),
            ));
        }
        if !c.extension.starts_with('.') || c.extension.len() < 2 {
            return Err(HarvestError::InvalidConfig(format!(
                "extension must look like '.pdf', got '{}'",
                c.extension
            )));
        }
        Ok(self.config)
    }
}
