/// Application configuration
///
/// Loaded once at startup from `config.toml` in the user's config directory:
/// - Linux: ~/.config/resume-classifier/config.toml
/// - macOS: ~/Library/Application Support/resume-classifier/config.toml
/// - Windows: %APPDATA%\resume-classifier\config.toml
///
/// Every key is optional. A missing file yields the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::theme::Palette;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/classify";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Full URL of the classification endpoint
    pub endpoint: String,
    /// Request timeout in seconds; unset means wait forever
    pub request_timeout_secs: Option<u64>,
    pub palette: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            palette: Palette::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("could not determine config directory, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                tracing::info!(
                    path = %path.display(),
                    endpoint = %config.endpoint,
                    primary = %config.palette.primary.to_hex(),
                    "loaded config"
                );
                config
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config file, using defaults");
                Self::default()
            }
        }
    }

    /// Read and parse a config file. Ok(None) if it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Where the config file should live
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("resume-classifier");
        path.push("config.toml");
        Some(path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
