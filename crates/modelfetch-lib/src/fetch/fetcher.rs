use super::types::{AttemptOutcome, AttemptRecord, FetchOutcome};
use crate::config::Config;
use crate::error::ModelFetchError;
use eyre::{Result, WrapErr};
use reqwest::Client;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, trace, warn};

const USER_AGENT: &str = concat!("modelfetch/", env!("CARGO_PKG_VERSION"));

/// Fetch the model from the built-in mirror list into the default destination.
pub async fn fetch_model() -> Result<FetchOutcome, ModelFetchError> {
    fetch_model_with(&Config::default()).await
}

/// Try each candidate URL in order and stop at the first one that produces a
/// file larger than `config.min_size_bytes`.
///
/// Every attempt writes straight to `config.output.path`, so whatever the last
/// attempt left behind stays there when all candidates fail.
pub async fn fetch_model_with(config: &Config) -> Result<FetchOutcome, ModelFetchError> {
    let output_path = config.output.path.as_path();
    ensure_output_directory(output_path)?;

    let client = Client::builder().user_agent(USER_AGENT).build()?;

    let mut attempts = Vec::with_capacity(config.candidate_urls.len());
    for url in &config.candidate_urls {
        info!("Trying {}...", url);

        let outcome = match download_to_path(&client, url, output_path).await {
            Ok(size) => classify_size(size, config.min_size_bytes),
            Err(err) => AttemptOutcome::Failed {
                reason: format!("{err:#}"),
            },
        };

        match &outcome {
            AttemptOutcome::Accepted { size } => {
                info!("Success! Downloaded to {}", output_path.display());
                info!("Size: {} bytes", size);
            }
            AttemptOutcome::TooSmall { size } => {
                info!(url = %url, size, "File too small, likely invalid.");
            }
            AttemptOutcome::Failed { reason } => {
                warn!(url = %url, "Failed: {}", reason);
            }
        }

        attempts.push(AttemptRecord {
            url: url.clone(),
            outcome: outcome.clone(),
        });

        if let AttemptOutcome::Accepted { size } = outcome {
            return Ok(FetchOutcome {
                url: url.clone(),
                path: output_path.to_path_buf(),
                size,
                attempts,
            });
        }
    }

    error!("All downloads failed.");
    Err(ModelFetchError::AllDownloadsFailed { attempts })
}

/// Create the directory holding `output_path` if it does not exist yet.
pub fn ensure_output_directory(output_path: &Path) -> Result<(), ModelFetchError> {
    let Some(parent) = output_path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    trace!(dir = %parent.display(), "Ensuring output directory exists");
    std::fs::create_dir_all(parent).map_err(|e| ModelFetchError::OutputDirectoryCreation {
        path: parent.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Strictly greater than the threshold is accepted.
pub fn classify_size(size: u64, min_size_bytes: u64) -> AttemptOutcome {
    if size > min_size_bytes {
        AttemptOutcome::Accepted { size }
    } else {
        AttemptOutcome::TooSmall { size }
    }
}

/// GET `url` and stream the body into `output_path`, returning the size of the
/// file on disk.
///
/// The destination is only created or truncated once the server has answered
/// with a success status.
pub async fn download_to_path(client: &Client, url: &str, output_path: &Path) -> Result<u64> {
    let mut response = client
        .get(url)
        .send()
        .await
        .wrap_err_with(|| format!("Failed to request {}", url))?
        .error_for_status()
        .wrap_err_with(|| format!("Server rejected request for {}", url))?;

    debug!(url = %url, status = %response.status(), content_length = ?response.content_length(), "Receiving");

    let file = tokio::fs::File::create(output_path)
        .await
        .wrap_err_with(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = tokio::io::BufWriter::new(file);

    while let Some(chunk) = response
        .chunk()
        .await
        .wrap_err_with(|| format!("Failed to read from {}", url))?
    {
        writer
            .write_all(&chunk)
            .await
            .wrap_err_with(|| format!("Failed to write to {}", output_path.display()))?;
    }

    writer
        .flush()
        .await
        .wrap_err_with(|| format!("Failed to flush {}", output_path.display()))?;

    let size = tokio::fs::metadata(output_path)
        .await
        .wrap_err_with(|| format!("Failed to stat {}", output_path.display()))?
        .len();
    Ok(size)
}
