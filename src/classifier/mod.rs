//! Label prediction over embedding vectors.
//!
//! [`Predictor`] is the only seam the scorer depends on. The production
//! implementation is [`LinearClassifier`], read from the JSON artifact that
//! ships next to the binaries.

pub mod error;
pub mod linear;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::ClassifierError;
pub use linear::{LinearArtifact, LinearClassifier};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockPredictor;

/// Something with a `predict` operation: one label per feature row, in order.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[Vec<f32>]) -> Result<Vec<String>, ClassifierError>;
}
