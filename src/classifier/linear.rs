use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use super::Predictor;
use super::error::ClassifierError;

/// On-disk form of a trained linear SVM.
///
/// `coef` has one row per class (one-vs-rest), or a single row for a binary
/// model whose positive side is `classes[1]`. Integer class ids are accepted
/// and kept as their decimal text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinearArtifact {
    #[serde(deserialize_with = "class_names")]
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

fn class_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ClassName {
        Text(String),
        Id(i64),
    }

    let names = Vec::<ClassName>::deserialize(deserializer)?;
    Ok(names
        .into_iter()
        .map(|name| match name {
            ClassName::Text(text) => text,
            ClassName::Id(id) => id.to_string(),
        })
        .collect())
}

/// Linear classifier over embedding vectors.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f32>>,
    intercept: Vec<f32>,
    dim: usize,
}

impl LinearClassifier {
    /// Reads and validates an artifact file.
    pub fn from_file(path: &Path) -> Result<Self, ClassifierError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: LinearArtifact = serde_json::from_str(&raw)?;
        let classifier = Self::from_artifact(artifact)?;

        info!(
            path = %path.display(),
            classes = classifier.classes.len(),
            dim = classifier.dim,
            "Classifier artifact loaded"
        );

        Ok(classifier)
    }

    /// Validates shapes and builds the classifier.
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, ClassifierError> {
        let LinearArtifact {
            classes,
            coef,
            intercept,
        } = artifact;

        let invalid = |reason: String| Err(ClassifierError::InvalidArtifact { reason });

        if classes.len() < 2 {
            return invalid(format!("need at least 2 classes, got {}", classes.len()));
        }

        let dim = match coef.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return invalid("coef must have at least one non-empty row".to_string()),
        };

        if let Some(row) = coef.iter().position(|r| r.len() != dim) {
            return invalid(format!(
                "coef row {} has {} features, expected {}",
                row,
                coef[row].len(),
                dim
            ));
        }

        if intercept.len() != coef.len() {
            return invalid(format!(
                "intercept has {} entries for {} coef rows",
                intercept.len(),
                coef.len()
            ));
        }

        let rows_fit = coef.len() == classes.len() || (classes.len() == 2 && coef.len() == 1);
        if !rows_fit {
            return invalid(format!(
                "{} coef rows do not fit {} classes",
                coef.len(),
                classes.len()
            ));
        }

        Ok(Self {
            classes,
            coef,
            intercept,
            dim,
        })
    }

    /// Number of features each input vector must have.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn decision(&self, features: &[f32]) -> Vec<f32> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect()
    }

    fn predict_one(&self, features: &[f32]) -> &str {
        let scores = self.decision(features);

        let index = if let [score] = scores.as_slice() {
            usize::from(*score > 0.0)
        } else {
            // First maximum wins ties.
            scores
                .iter()
                .enumerate()
                .fold((0, f32::NEG_INFINITY), |best, (i, &s)| {
                    if s > best.1 { (i, s) } else { best }
                })
                .0
        };

        &self.classes[index]
    }
}

impl Predictor for LinearClassifier {
    fn predict(&self, features: &[Vec<f32>]) -> Result<Vec<String>, ClassifierError> {
        if let Some(bad) = features.iter().find(|f| f.len() != self.dim) {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.dim,
                actual: bad.len(),
            });
        }

        debug!(rows = features.len(), "Classifying embeddings");

        Ok(features
            .iter()
            .map(|f| self.predict_one(f).to_string())
            .collect())
    }
}
