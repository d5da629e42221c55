//! Mock predictor for tests.

use super::Predictor;
use super::error::ClassifierError;

#[derive(Debug, Clone)]
enum Behaviour {
    /// Cycles through the labels, one per row.
    Cycle(Vec<String>),
    /// Like `Cycle`, but returns one label fewer than asked for.
    ShortBy1(Vec<String>),
    Fail,
}

/// Deterministic predictor with scripted behaviour.
#[derive(Debug, Clone)]
pub struct MockPredictor {
    behaviour: Behaviour,
}

impl MockPredictor {
    /// Labels rows by cycling through `labels`.
    pub fn cycling<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            behaviour: Behaviour::Cycle(labels.into_iter().map(Into::into).collect()),
        }
    }

    /// Drops the last label of every prediction.
    pub fn short_by_one<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            behaviour: Behaviour::ShortBy1(labels.into_iter().map(Into::into).collect()),
        }
    }

    /// Every call fails.
    pub fn failing() -> Self {
        Self {
            behaviour: Behaviour::Fail,
        }
    }
}

fn cycle(labels: &[String], n: usize) -> Vec<String> {
    if labels.is_empty() {
        return vec![String::new(); n];
    }
    labels.iter().cycle().take(n).cloned().collect()
}

impl Predictor for MockPredictor {
    fn predict(&self, features: &[Vec<f32>]) -> Result<Vec<String>, ClassifierError> {
        match &self.behaviour {
            Behaviour::Cycle(labels) => Ok(cycle(labels, features.len())),
            Behaviour::ShortBy1(labels) => Ok(cycle(labels, features.len().saturating_sub(1))),
            Behaviour::Fail => Err(ClassifierError::InvalidArtifact {
                reason: "mock predictor failure".to_string(),
            }),
        }
    }
}
