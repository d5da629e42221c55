//! Sentence encoder (BERT + tokenizer, mean pooled).
//!
//! Use [`EncoderConfig::stub`] for tests/examples without model files.

/// Encoder configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::EncoderConfig;

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::embedding::Encoder;
use crate::embedding::bert::SentenceBert;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::{load_batch_tokenizer, normalize};

enum EncoderBackend {
    Model {
        model: SentenceBert,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Text-to-vector encoder (supports stub mode).
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("model_name", &self.config.model_name)
            .field("embedding_dim", &self.config.embedding_dim)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    ///
    /// Model files must already be present; see [`crate::embedding::hub`].
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Encoder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        if !config.files_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for encoder");

        let model = SentenceBert::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                model: config.model_name.clone(),
                reason: e.to_string(),
            }
        })?;

        let tokenizer = load_batch_tokenizer(&config.model_dir, config.max_seq_len).map_err(
            |e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            },
        )?;

        let mut config = config;
        config.embedding_dim = model.hidden_size();

        info!(
            model = %config.model_name,
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn encode_with_model(
        &self,
        texts: &[&str],
        model: &SentenceBert,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let encodings = tokenizer.encode_batch(texts.to_vec(), true).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        let batch = encodings.len();
        let seq_len = encodings.iter().map(|e| e.get_ids().len()).max().unwrap_or(0);
        if seq_len == 0 {
            return Err(EmbeddingError::TokenizationFailed {
                reason: "tokenizer produced no tokens".to_string(),
            });
        }

        // Padding is batch-longest, so every row already has `seq_len` entries.
        let mut ids = Vec::with_capacity(batch * seq_len);
        let mut type_ids = Vec::with_capacity(batch * seq_len);
        let mut mask = Vec::with_capacity(batch * seq_len);
        for encoding in &encodings {
            ids.extend_from_slice(encoding.get_ids());
            type_ids.extend_from_slice(encoding.get_type_ids());
            mask.extend_from_slice(encoding.get_attention_mask());
        }

        debug!(batch, seq_len, "Encoding batch (transformer forward pass)");

        let input_ids = Tensor::from_vec(ids, (batch, seq_len), device)?;
        let token_type_ids = Tensor::from_vec(type_ids, (batch, seq_len), device)?;
        let attention_mask = Tensor::from_vec(mask, (batch, seq_len), device)?;

        let pooled = model
            .forward_pooled(&input_ids, &token_type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?;

        let mut vectors = pooled.to_vec2::<f32>()?;
        for v in &mut vectors {
            normalize(v);
        }
        Ok(vectors)
    }

    fn encode_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(&mut embedding);
        embedding
    }
}

impl Encoder for SentenceEncoder {
    fn dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.encode_with_model(texts, model, tokenizer, device),
            EncoderBackend::Stub => {
                debug!(batch = texts.len(), "Generating stub embeddings");
                Ok(texts.iter().map(|text| self.encode_stub(text)).collect())
            }
        }
    }
}
