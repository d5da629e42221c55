use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, ENCODER_FILES, ENCODER_MODEL_NAME,
};
use crate::embedding::error::EmbeddingError;

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEncoder`](super::SentenceEncoder).
pub struct EncoderConfig {
    /// Public model identifier, e.g. `all-MiniLM-L6-v2`.
    pub model_name: String,
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_name: ENCODER_MODEL_NAME.to_string(),
            model_dir: PathBuf::new(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl EncoderConfig {
    /// Config for `model_name`, cached under `<models_dir>/<model_name>`.
    pub fn for_model(models_dir: &Path, model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            model_dir: models_dir.join(model_name),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Sets the stub output dimension.
    pub fn with_embedding_dim(mut self, dim: usize) -> Self {
        self.embedding_dim = dim;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be positive".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_name.trim().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_name is required".to_string(),
            });
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        Ok(())
    }

    /// Encoder files not yet present in [`model_dir`](Self::model_dir).
    pub fn missing_files(&self) -> Vec<&'static str> {
        ENCODER_FILES
            .into_iter()
            .filter(|name| !self.model_dir.join(name).is_file())
            .collect()
    }

    /// Returns `true` if every encoder file is present.
    pub fn files_available(&self) -> bool {
        self.missing_files().is_empty()
    }
}
