use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to read classifier artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse classifier artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid classifier artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
