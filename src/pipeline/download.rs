//! Download: fetch one PDF URL into the output directory.
//!
//! A URL whose sanitized file name already exists is skipped without any
//! network access; re-running over the same link list only fetches what is
//! missing. There is no content refresh and no retry.
//!
//! The body is streamed into `<name>.part` and renamed into place once the
//! last chunk is written, so a connection that drops mid-body never leaves a
//! truncated `.pdf` behind for the sweep to trip over.
//!
//! Failure classes:
//! - transport or HTTP-status failure → `Ok(DownloadOutcome::Failed)`; the
//!   caller logs it and moves on to the next URL
//! - filesystem failure (cannot create the directory, disk full) →
//!   `Err(HarvestError)`; the run stops

use crate::config::HarvestConfig;
use crate::error::{DownloadError, HarvestError};
use crate::output::DownloadOutcome;
use crate::pipeline::sanitize::url_to_filename;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, warn};

/// Download `url` into `config.output_dir` unless its file already exists.
pub async fn download_pdf(
    client: &reqwest::Client,
    url: &str,
    config: &HarvestConfig,
) -> Result<DownloadOutcome, HarvestError> {
    ensure_output_dir(&config.output_dir).await?;

    let filename = url_to_filename(url);
    let path = config.output_dir.join(&filename);

    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|e| HarvestError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
    if exists {
        info!("File already exists: {}", path.display());
        return Ok(DownloadOutcome::AlreadyExists {
            url: url.to_string(),
            path,
        });
    }

    debug!("GET {}", url);
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => return Ok(failed(url, DownloadError::from_reqwest(&e, config.download_timeout_secs))),
    };

    let status = response.status();
    if !status.is_success() {
        return Ok(failed(
            url,
            DownloadError::HttpStatus {
                status: status.as_u16(),
            },
        ));
    }

    let part_path = part_path_for(&path);
    match write_body(response, &part_path, config).await {
        Ok(Ok(bytes)) => {
            tokio::fs::rename(&part_path, &path)
                .await
                .map_err(|e| HarvestError::WriteFailed {
                    path: path.clone(),
                    source: e,
                })?;
            info!("Downloaded: {} ({} bytes)", path.display(), bytes);
            Ok(DownloadOutcome::Downloaded {
                url: url.to_string(),
                path,
                bytes,
            })
        }
        Ok(Err(download_err)) => {
            discard_part(&part_path).await;
            Ok(failed(url, download_err))
        }
        Err(fatal) => {
            discard_part(&part_path).await;
            Err(fatal)
        }
    }
}

/// Create the output directory (and parents) if it does not exist yet.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), HarvestError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| HarvestError::OutputDirFailed {
            path: dir.to_path_buf(),
            source: e,
        })
}

/// Stream the response body to `part_path`.
///
/// Outer `Err` is a filesystem failure; inner `Err` a network failure.
async fn write_body(
    response: reqwest::Response,
    part_path: &Path,
    config: &HarvestConfig,
) -> Result<Result<u64, DownloadError>, HarvestError> {
    let write_err = |e: std::io::Error| HarvestError::WriteFailed {
        path: part_path.to_path_buf(),
        source: e,
    };

    let file = tokio::fs::File::create(part_path).await.map_err(write_err)?;
    let mut writer = BufWriter::with_capacity(config.chunk_size, file);
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                return Ok(Err(DownloadError::from_reqwest(
                    &e,
                    config.download_timeout_secs,
                )))
            }
        };
        if chunk.is_empty() {
            continue;
        }
        writer.write_all(&chunk).await.map_err(write_err)?;
        written += chunk.len() as u64;
    }

    writer.flush().await.map_err(write_err)?;
    Ok(Ok(written))
}

fn part_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

async fn discard_part(part_path: &Path) {
    if let Err(e) = tokio::fs::remove_file(part_path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove partial file {}: {}", part_path.display(), e);
        }
    }
}

fn failed(url: &str, error: DownloadError) -> DownloadOutcome {
    info!("Failed to download {}: {}", url, error);
    DownloadOutcome::Failed {
        url: url.to_string(),
        error,
    }
}
