//! Client for the scoring service's `POST /score_headlines`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Unable to reach API at {endpoint}: {reason}")]
    Unreachable { endpoint: String, reason: String },

    #[error("API response missing 'labels' list")]
    MissingLabels,
}

/// `<base>/score_headlines`, tolerating a trailing slash on the base.
pub fn endpoint(api_url: &str) -> String {
    format!("{}/score_headlines", api_url.trim_end_matches('/'))
}

/// Something that can score a batch of cleaned headlines.
#[async_trait]
pub trait ScoreApi: Send + Sync {
    async fn score(
        &self,
        api_url: &str,
        timeout: Duration,
        headlines: &[String],
    ) -> Result<Vec<String>, ClientError>;
}

/// `reqwest`-backed [`ScoreApi`].
#[derive(Debug, Clone, Default)]
pub struct ScoreClient {
    http: reqwest::Client,
}

impl ScoreClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreApi for ScoreClient {
    async fn score(
        &self,
        api_url: &str,
        timeout: Duration,
        headlines: &[String],
    ) -> Result<Vec<String>, ClientError> {
        let endpoint = endpoint(api_url);
        let unreachable = |e: reqwest::Error| ClientError::Unreachable {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        };

        debug!(endpoint = %endpoint, count = headlines.len(), "Calling scoring API");
        let resp = self
            .http
            .post(&endpoint)
            .timeout(timeout)
            .json(&serde_json::json!({ "headlines": headlines }))
            .send()
            .await
            .map_err(unreachable)?;

        let status = resp.status();
        let body = resp.text().await.map_err(unreachable)?;

        if !status.is_success() {
            warn!(endpoint = %endpoint, status = status.as_u16(), "Scoring API returned an error");
            return Err(ClientError::Status {
                code: status.as_u16(),
                body,
            });
        }

        parse_labels(&body)
    }
}

/// Extracts `labels` from a response body. Numeric labels become their text.
pub fn parse_labels(body: &str) -> Result<Vec<String>, ClientError> {
    let parsed: Value = serde_json::from_str(body).map_err(|_| ClientError::MissingLabels)?;

    let Some(labels) = parsed.get("labels").and_then(Value::as_array) else {
        return Err(ClientError::MissingLabels);
    };

    Ok(labels
        .iter()
        .map(|label| match label {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect())
}
