//! Gateway configuration.
//!
//! Layering, lowest precedence first:
//!
//! 1. built-in defaults (`http://localhost:3000`, 30 s timeout),
//! 2. an optional YAML file with `api_url` / `timeout_secs` keys,
//! 3. environment variables `VACUNAS_API_URL` / `VACUNAS_TIMEOUT_SECS`.
//!
//! Command-line overrides are applied by the caller on the returned value.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the vaccination backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend. Collection paths (`/api/...`) are appended.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// On-disk shape of the YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Build a config for an explicit base URL with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("base_url", base_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load defaults, then `file` if given, then the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = Self::new(DEFAULT_API_URL)?;
        if let Some(path) = file {
            cfg.apply_file(path)?;
        }
        cfg.apply_env()?;
        Ok(cfg)
    }

    /// Load configuration from environment variables over the defaults.
    ///
    /// Variables:
    /// - `VACUNAS_API_URL` (default: `http://localhost:3000`)
    /// - `VACUNAS_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Replace the request timeout. Zero is rejected.
    pub fn set_timeout_secs(&mut self, secs: u64) -> Result<(), ConfigError> {
        self.timeout_secs = check_timeout("timeout", secs)?;
        Ok(())
    }

    /// Create a configuration pointing at a local mock server (for testing).
    pub fn local_mock(uri: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("mock", uri)?,
            timeout_secs: 5,
        })
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = if raw.trim().is_empty() {
            FileConfig::default()
        } else {
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        if let Some(url) = file.api_url {
            self.base_url = parse_url("api_url", &url)?;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout_secs = check_timeout("timeout_secs", secs)?;
        }
        Ok(())
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("VACUNAS_API_URL") {
            self.base_url = parse_url("VACUNAS_API_URL", &url)?;
        }
        if let Ok(raw) = std::env::var("VACUNAS_TIMEOUT_SECS") {
            let secs = raw.trim().parse().map_err(|_| {
                ConfigError::InvalidTimeout("VACUNAS_TIMEOUT_SECS".into(), raw.clone())
            })?;
            self.timeout_secs = check_timeout("VACUNAS_TIMEOUT_SECS", secs)?;
        }
        Ok(())
    }
}

fn check_timeout(source: &str, secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(source.to_string(), "0".into()));
    }
    Ok(secs)
}

fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            format!("unsupported scheme {:?}", url.scheme()),
        ));
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout for {0}: expected a positive whole number of seconds, got {1:?}")]
    InvalidTimeout(String, String),
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
