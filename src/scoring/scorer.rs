use tracing::{debug, info};

use crate::classifier::Predictor;
use crate::embedding::Encoder;

use super::error::ScoringError;

/// Encode-then-classify pipeline over cleaned headlines.
pub struct HeadlineScorer<E, P> {
    encoder: E,
    predictor: P,
}

impl<E, P> std::fmt::Debug for HeadlineScorer<E, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlineScorer")
            .field("encoder", &std::any::type_name::<E>())
            .field("predictor", &std::any::type_name::<P>())
            .finish()
    }
}

impl<E: Encoder, P: Predictor> HeadlineScorer<E, P> {
    pub fn new(encoder: E, predictor: P) -> Self {
        Self { encoder, predictor }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Scores already-cleaned headlines: one label per headline, same order.
    ///
    /// Callers filter blanks first (see [`clean_headlines`](super::clean_headlines));
    /// an empty slice is rejected rather than sent to the model.
    pub fn score(&self, headlines: &[String]) -> Result<Vec<String>, ScoringError> {
        if headlines.is_empty() {
            return Err(ScoringError::EmptyInput);
        }

        let texts: Vec<&str> = headlines.iter().map(String::as_str).collect();
        debug!(count = texts.len(), "Encoding headlines");

        let embeddings = self.encoder.encode_batch(&texts)?;
        check_len("encoder", texts.len(), embeddings.len())?;

        let labels = self.predictor.predict(&embeddings)?;
        check_len("classifier", texts.len(), labels.len())?;

        info!(count = labels.len(), "Scored headlines");
        Ok(labels)
    }
}

fn check_len(stage: &'static str, expected: usize, actual: usize) -> Result<(), ScoringError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScoringError::LengthMismatch {
            stage,
            expected,
            actual,
        })
    }
}
