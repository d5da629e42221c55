use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("no headlines to score")]
    EmptyInput,

    #[error("encoding failed: {0}")]
    Encoding(#[from] EmbeddingError),

    #[error("prediction failed: {0}")]
    Prediction(#[from] ClassifierError),

    #[error("{stage} returned {actual} results for {expected} headlines")]
    LengthMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
}
