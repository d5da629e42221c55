use std::path::PathBuf;
use thiserror::Error;

use crate::loader::LoadError;
use crate::scoring::ScoringError;

use super::USAGE;

/// Every way a CLI run can end early; `Display` is the user-facing message.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Please provide an input file and a source.\n{USAGE}")]
    Usage,

    #[error("Please provide a non-empty source.\n{USAGE}")]
    EmptySource,

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No headlines found in {}.", path.display())]
    NoHeadlines { path: PathBuf },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to score headlines: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
