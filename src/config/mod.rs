//! Environment-backed configuration.
//!
//! Every setting has a default. [`Config`] covers the scoring service,
//! [`CliConfig`] the batch CLI and [`UiConfig`] the browser UI. Each reads its
//! overrides from the environment.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_API_PORT, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_UI_PORT, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

/// Default tracing filter when `LOG_LEVEL` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
const ENV_MODEL_DIR: &str = "HEADLINES_MODEL_DIR";
const ENV_OFFLINE: &str = "HEADLINES_OFFLINE";

/// Scoring service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8081`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Tracing filter directive. Default: `info`.
    pub log_level: String,

    /// Overrides the `models/` directory next to the executable.
    pub models_dir: Option<PathBuf>,

    /// Disables fetching missing encoder files.
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_API_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            models_dir: None,
            offline: false,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PORT";
    const ENV_BIND_ADDR: &'static str = "BIND_ADDR";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: parse_port_from_env(Self::ENV_PORT, defaults.port)?,
            bind_addr: parse_bind_addr_from_env(Self::ENV_BIND_ADDR, defaults.bind_addr)?,
            log_level: parse_log_level_from_env(defaults.log_level),
            models_dir: parse_optional_path_from_env(ENV_MODEL_DIR),
            offline: parse_flag_from_env(ENV_OFFLINE),
        })
    }

    /// Validates paths (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.models_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Settings the `score_headlines` CLI reads. Service-only variables such as
/// `PORT` and `BIND_ADDR` are never consulted.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Tracing filter directive. Default: `info`.
    pub log_level: String,

    /// Overrides the `models/` directory next to the executable.
    pub models_dir: Option<PathBuf>,

    /// Disables fetching missing encoder files.
    pub offline: bool,
}

impl CliConfig {
    /// Loads the CLI settings; every variable is optional and none can fail.
    pub fn from_env() -> Self {
        Self {
            log_level: parse_log_level_from_env(DEFAULT_LOG_LEVEL.to_string()),
            models_dir: parse_optional_path_from_env(ENV_MODEL_DIR),
            offline: parse_flag_from_env(ENV_OFFLINE),
        }
    }
}

/// Browser UI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// UI server port. Default: `9081`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Base URL of the scoring service. Default: `http://127.0.0.1:8081`.
    pub api_url: String,

    /// Request timeout for scoring calls, in seconds. Default: `20`.
    pub timeout_secs: u64,

    /// Tracing filter directive. Default: `info`.
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_UI_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl UiConfig {
    const ENV_PORT: &'static str = "UI_PORT";
    const ENV_BIND_ADDR: &'static str = "UI_BIND_ADDR";
    const ENV_API_URL: &'static str = "HEADLINE_API_URL";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = parse_string_from_env(Self::ENV_API_URL, defaults.api_url)
            .trim()
            .to_string();
        validate_api_url(&api_url)?;

        Ok(Self {
            port: parse_port_from_env(Self::ENV_PORT, defaults.port)?,
            bind_addr: parse_bind_addr_from_env(Self::ENV_BIND_ADDR, defaults.bind_addr)?,
            api_url,
            timeout_secs: defaults.timeout_secs,
            log_level: parse_log_level_from_env(defaults.log_level),
        })
    }

    /// Returns `"{bind_addr}:{port}"`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Clamps a UI timeout into the accepted `1..=120` second range.
pub fn clamp_timeout_secs(secs: u64) -> u64 {
    secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
}

/// Accepts only absolute `http`/`https` URLs.
pub fn validate_api_url(value: &str) -> Result<(), ConfigError> {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));

    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
        Some(_) => Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: "missing host",
        }),
        None => Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: "scheme must be http or https",
        }),
    }
}

fn parse_port_from_env(var_name: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env::var(var_name) {
        Ok(value) => {
            let port: u16 = value
                .trim()
                .parse()
                .map_err(|e| ConfigError::PortParseError {
                    name: var_name,
                    value: value.clone(),
                    source: e,
                })?;

            if port == 0 {
                return Err(ConfigError::InvalidPort {
                    name: var_name,
                    value,
                });
            }

            Ok(port)
        }
        Err(_) => Ok(default),
    }
}

fn parse_bind_addr_from_env(var_name: &'static str, default: IpAddr) -> Result<IpAddr, ConfigError> {
    match env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidBindAddr {
                name: var_name,
                value,
                source: e,
            }),
        Err(_) => Ok(default),
    }
}

fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_string_from_env(var_name: &str, default: String) -> String {
    env::var(var_name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn parse_log_level_from_env(default: String) -> String {
    let fallback = parse_string_from_env("RUST_LOG", default);
    parse_string_from_env(ENV_LOG_LEVEL, fallback)
}

fn parse_flag_from_env(var_name: &str) -> bool {
    env::var_os(var_name).is_some_and(|v| !v.is_empty())
}
