use std::path::PathBuf;
use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Model file not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("cannot locate executable directory: {reason}")]
    ExecutableDir { reason: String },

    #[error("failed to load classifier: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("failed to construct encoder: {0}")]
    Encoder(#[from] EmbeddingError),

    #[error("encoder produces {encoder}-dim vectors but classifier expects {classifier}")]
    DimensionMismatch { encoder: usize, classifier: usize },

    #[error("encoder load task failed: {reason}")]
    Join { reason: String },
}
