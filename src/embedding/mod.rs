//! Embedding + model utilities.
//!
//! - [`encoder`] turns headlines into fixed-length vectors.
//! - [`hub`] fetches encoder files that are not yet on disk.

/// BERT wrapper with mean pooling used by the encoder.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder.
pub mod encoder;
mod error;
/// Encoder file download.
pub mod hub;
/// Tokenizer loading and vector helpers.
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;

#[cfg(any(test, feature = "mock"))]
pub use mock::RecordingEncoder;

/// Something that maps a batch of texts to one vector per text.
pub trait Encoder: Send + Sync {
    /// Length of every vector this encoder returns.
    fn dim(&self) -> usize;

    /// Encodes `texts` in one call, preserving order.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}
