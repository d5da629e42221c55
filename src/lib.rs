//! Headline sentiment scoring library (shared by the CLI, the scoring service
//! and the browser UI).
//!
//! # Layout
//!
//! - [`embedding`] - sentence encoder (`all-MiniLM-L6-v2`, candle BERT + mean pooling)
//! - [`classifier`] - linear classifier read from `models/svm.json`
//! - [`scoring`] - cleaning plus the batch encode → classify pipeline
//! - [`loader`] - resolves model paths and builds a [`ProductionScorer`]
//! - [`cli`] - the `score_headlines` batch driver
//! - [`config`], [`logging`] - environment settings and tracing set-up
//!
//! ## Test/Mock Support
//! [`embedding::RecordingEncoder`] and [`classifier::MockPredictor`] are
//! available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod loader;
pub mod logging;
pub mod scoring;

pub use classifier::{ClassifierError, LinearClassifier, Predictor};
pub use config::{Config, ConfigError, UiConfig};
pub use embedding::{EmbeddingError, Encoder, EncoderConfig, SentenceEncoder};
pub use loader::{FetchPolicy, LoadError, ModelPaths, ProductionScorer, load_scorer};
pub use scoring::{HeadlineScorer, ScoringError, clean_headlines, clean_with_index};

#[cfg(any(test, feature = "mock"))]
pub use classifier::MockPredictor;
#[cfg(any(test, feature = "mock"))]
pub use embedding::RecordingEncoder;
