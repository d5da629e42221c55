//! Resolves and loads the model pair every front end scores with.
//!
//! The classifier artifact lives at a fixed path next to the running
//! executable (`models/svm.json`); the encoder is identified by its public
//! name and cached under the same `models/` directory. A missing artifact is
//! reported before the encoder is touched.

pub mod error;


pub use error::LoadError;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::classifier::LinearClassifier;
use crate::config::Config;
use crate::constants::{CLASSIFIER_ARTIFACT, ENCODER_MODEL_NAME, MODELS_DIR_NAME};
use crate::embedding::hub::{HUB_BASE_URL, fetch_missing};
use crate::embedding::{Encoder, EncoderConfig, SentenceEncoder};
use crate::scoring::HeadlineScorer;

/// Scorer built from the production model pair.
pub type ProductionScorer = HeadlineScorer<SentenceEncoder, LinearClassifier>;

/// Where the model files are expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub models_dir: PathBuf,
    pub artifact_path: PathBuf,
    pub encoder_name: String,
}

impl ModelPaths {
    /// Paths under an explicit models directory.
    pub fn in_dir(models_dir: impl Into<PathBuf>) -> Self {
        let models_dir = models_dir.into();
        Self {
            artifact_path: models_dir.join(CLASSIFIER_ARTIFACT),
            encoder_name: ENCODER_MODEL_NAME.to_string(),
            models_dir,
        }
    }

    /// Uses `override_dir` when given, else `models/` beside the executable.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, LoadError> {
        match override_dir {
            Some(dir) => Ok(Self::in_dir(dir)),
            None => Ok(Self::in_dir(exe_dir()?.join(MODELS_DIR_NAME))),
        }
    }

    /// Paths for a service configuration.
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        Self::resolve(config.models_dir.as_deref())
    }

    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig::for_model(&self.models_dir, &self.encoder_name)
    }
}

fn exe_dir() -> Result<PathBuf, LoadError> {
    let exe = std::env::current_exe().map_err(|e| LoadError::ExecutableDir {
        reason: e.to_string(),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LoadError::ExecutableDir {
            reason: format!("{} has no parent directory", exe.display()),
        })
}

/// Whether missing encoder files may be downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    Allow,
    Offline,
}

impl FetchPolicy {
    pub fn from_offline_flag(offline: bool) -> Self {
        if offline { Self::Offline } else { Self::Allow }
    }
}

/// Loads the classifier and encoder and wires them into a scorer.
pub async fn load_scorer(
    paths: &ModelPaths,
    policy: FetchPolicy,
) -> Result<ProductionScorer, LoadError> {
    if !paths.artifact_path.is_file() {
        warn!(path = %paths.artifact_path.display(), "Classifier artifact not found");
        return Err(LoadError::ArtifactNotFound {
            path: paths.artifact_path.clone(),
        });
    }

    let classifier = LinearClassifier::from_file(&paths.artifact_path)?;

    let encoder_config = paths.encoder_config();
    if policy == FetchPolicy::Allow {
        let fetched = fetch_missing(&encoder_config, HUB_BASE_URL).await?;
        if !fetched.is_empty() {
            info!(model = %paths.encoder_name, files = ?fetched, "Encoder files fetched");
        }
    }

    let encoder = tokio::task::spawn_blocking(move || SentenceEncoder::load(encoder_config))
        .await
        .map_err(|e| LoadError::Join {
            reason: e.to_string(),
        })??;

    if encoder.dim() != classifier.dim() {
        return Err(LoadError::DimensionMismatch {
            encoder: encoder.dim(),
            classifier: classifier.dim(),
        });
    }

    info!(
        artifact = %paths.artifact_path.display(),
        encoder = %paths.encoder_name,
        "Model loaded"
    );

    Ok(HeadlineScorer::new(encoder, classifier))
}
