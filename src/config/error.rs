//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid {name} '{value}': must be between 1 and 65535")]
    InvalidPort { name: &'static str, value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse {name} '{value}': {source}")]
    PortParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse {name} '{value}': {source}")]
    InvalidBindAddr {
        name: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// API base URL is not an absolute http(s) URL.
    #[error("invalid API url '{value}': {reason}")]
    InvalidUrl { value: String, reason: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
