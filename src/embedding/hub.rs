//! Fetches missing sentence-encoder files from the public model hub.
//!
//! Files land in [`EncoderConfig::model_dir`]; each is written to a `.part`
//! file first and renamed once complete, so an interrupted fetch never leaves
//! a truncated weight file behind.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::constants::ENCODER_MODEL_ORG;
use crate::embedding::encoder::EncoderConfig;
use crate::embedding::error::EmbeddingError;

/// Base URL files are resolved against.
pub const HUB_BASE_URL: &str = "https://huggingface.co";

const FETCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Download URL for one file of `model_name`.
pub fn file_url(base_url: &str, model_name: &str, file: &str) -> String {
    format!(
        "{}/{}/{}/resolve/main/{}",
        base_url.trim_end_matches('/'),
        ENCODER_MODEL_ORG,
        model_name,
        file
    )
}

/// Downloads any encoder files missing from the config's model directory.
///
/// Returns the names of files fetched (empty when everything was present).
pub async fn fetch_missing(
    config: &EncoderConfig,
    base_url: &str,
) -> Result<Vec<&'static str>, EmbeddingError> {
    let missing = config.missing_files();
    if missing.is_empty() {
        return Ok(missing);
    }

    tokio::fs::create_dir_all(&config.model_dir)
        .await
        .map_err(|e| EmbeddingError::FetchFailed {
            file: config.model_dir.display().to_string(),
            reason: e.to_string(),
        })?;

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| EmbeddingError::FetchFailed {
            file: config.model_name.clone(),
            reason: e.to_string(),
        })?;

    for file in &missing {
        let url = file_url(base_url, &config.model_name, file);
        info!(model = %config.model_name, %url, "Fetching encoder file");

        if let Err(e) = fetch_one(&client, &url, &config.model_dir.join(file)).await {
            warn!(file, error = %e, "Encoder file fetch failed");
            return Err(EmbeddingError::FetchFailed {
                file: file.to_string(),
                reason: e,
            });
        }
    }

    Ok(missing)
}

async fn fetch_one(client: &reqwest::Client, url: &str, dest: &Path) -> Result<(), String> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;

    let partial = dest.with_extension("part");
    tokio::fs::write(&partial, &bytes)
        .await
        .map_err(|e| e.to_string())?;
    tokio::fs::rename(&partial, dest)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
