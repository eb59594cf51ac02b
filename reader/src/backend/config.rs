//! Reader configuration.
//!
//! Loaded from a YAML file with environment overrides. Every field has a
//! default, so a missing file is not an error.

use serde::{Deserialize, Serialize};
use shared::SortSettings;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "READER_CONFIG";
pub const LOG_LEVEL_ENV: &str = "READER_LOG";
pub const SNAPSHOT_PATH_ENV: &str = "READER_SNAPSHOT";
pub const DEFAULT_CONFIG_PATH: &str = "reader.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Config {} is not valid YAML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Log filter directive (trace, debug, info, warn, error)
    pub log_level: String,
    /// Currency for donor totals whose first donation has none
    pub fallback_currency: String,
    /// Feed snapshot to read when none is given on the command line
    pub snapshot_path: Option<PathBuf>,
    /// Settings the reader starts with
    pub settings: SortSettings,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fallback_currency: "GBP".to_string(),
            snapshot_path: None,
            settings: SortSettings::default(),
        }
    }
}

impl ReaderConfig {
    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the file named by `READER_CONFIG` (default
    /// `reader.yaml`), then apply `READER_LOG` and `READER_SNAPSHOT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Ok(Self::load(&path)?.with_overrides(
            env::var(LOG_LEVEL_ENV).ok(),
            env::var(SNAPSHOT_PATH_ENV).ok().map(PathBuf::from),
        ))
    }

    pub fn with_overrides(mut self, log_level: Option<String>, snapshot_path: Option<PathBuf>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(path) = snapshot_path {
            self.snapshot_path = Some(path);
        }
        self
    }
}
