//! Recording encoder for tests.

use std::sync::Mutex;

use super::Encoder;
use super::error::EmbeddingError;

/// Encoder that remembers every batch it was asked to encode.
///
/// Each text becomes a `dim`-length vector whose first component is the
/// text's byte length, so tests can tell inputs apart downstream.
#[derive(Debug)]
pub struct RecordingEncoder {
    dim: usize,
    fail: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingEncoder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// An encoder whose every call fails with `InferenceFailed`.
    pub fn failing(dim: usize) -> Self {
        Self {
            fail: true,
            ..Self::new(dim)
        }
    }

    /// Batches received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Encoder for RecordingEncoder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(texts.iter().map(|t| t.to_string()).collect());

        if self.fail {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock encoder failure".to_string(),
            });
        }

        Ok(texts
            .iter()
            .map(|t| {
                let mut v = vec![0.0; self.dim];
                if let Some(first) = v.first_mut() {
                    *first = t.len() as f32;
                }
                v
            })
            .collect())
    }
}
