//! Configuration for a shrine.
//!
//! Settings come from an optional TOML file and can be overridden with the
//! builder methods:
//!
//! ```toml
//! seed = 42
//! data_dir = "/var/lib/yudane"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{YudaneError, YudaneResult};

/// Configuration for a shrine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YudaneConfig {
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Directory for persisted records. `None` uses the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl YudaneConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str, path: &Path) -> YudaneResult<Self> {
        toml::from_str(s).map_err(|source| YudaneError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file. A missing file yields the default config.
    pub fn load(path: &Path) -> YudaneResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(YudaneError::Storage {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Default config file location (`<config dir>/yudane/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("yudane").join("config.toml"))
    }

    /// Directory where records are stored.
    pub fn resolve_data_dir(&self) -> YudaneResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join("yudane"))
                .ok_or(YudaneError::NoDataDir),
        }
    }
}
