use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("encoder files not found in: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load encoder '{model}': {reason}")]
    ModelLoadFailed { model: String, reason: String },

    #[error("failed to fetch encoder file {file}: {reason}")]
    FetchFailed { file: String, reason: String },

    #[error("encoding failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid encoder configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
