use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use headlines::scoring::ScoringError;

use super::payload::ErrorResponse;

/// Detail returned for every scoring failure; the cause is only logged.
pub const SCORING_FAILED_DETAIL: &str = "Failed to score headlines";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("headlines must be non-empty")]
    EmptyHeadlines,

    #[error("headlines must contain text")]
    BlankHeadlines,

    #[error("{0}")]
    InvalidBody(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(#[from] ScoringError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyHeadlines | ApiError::BlankHeadlines => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ScoringFailed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::ScoringFailed(_) | ApiError::Internal(_) => SCORING_FAILED_DETAIL.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Scoring request failed");
        }

        let body = Json(ErrorResponse {
            detail: self.detail(),
        });

        (status, body).into_response()
    }
}
