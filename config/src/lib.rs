//! Configuration loading for the Kinesis promise facade.
//!
//! The config file is TOML, looked up at `$KINESIS_PROMISE_CONFIG` or
//! `<config dir>/kinesis-promise/config.toml`. Every field is optional and a
//! missing file is not an error.
//!
//! ```toml
//! [adapter]
//! double_settlement = "warn"   # ignore | warn | panic
//! ```
//!
//! `KINESIS_PROMISE_DOUBLE_SETTLEMENT` overrides the file's policy.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use kinesis_promise_types::{DoubleSettlement, ParseDoubleSettlementError};

/// Env var naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "KINESIS_PROMISE_CONFIG";
/// Env var overriding `[adapter] double_settlement`.
pub const DOUBLE_SETTLEMENT_ENV: &str = "KINESIS_PROMISE_DOUBLE_SETTLEMENT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid {var}: {source}")]
    Env {
        var: &'static str,
        source: ParseDoubleSettlementError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KinesisPromiseConfig {
    pub adapter: Option<AdapterConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    /// What to do when the client invokes a completion handler twice.
    pub double_settlement: Option<DoubleSettlement>,
}

impl KinesisPromiseConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_with(config_path())
    }

    fn load_with(path: Option<PathBuf>) -> Result<Option<Self>, ConfigError> {
        let Some(path) = path else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Policy from the file alone, falling back to the default.
    #[must_use]
    pub fn file_double_settlement(&self) -> DoubleSettlement {
        self.adapter
            .as_ref()
            .and_then(|adapter| adapter.double_settlement)
            .unwrap_or_default()
    }

    /// Effective policy: `KINESIS_PROMISE_DOUBLE_SETTLEMENT` if set, else the
    /// file's value, else the default.
    pub fn double_settlement(&self) -> Result<DoubleSettlement, ConfigError> {
        self.double_settlement_with(env::var(DOUBLE_SETTLEMENT_ENV).ok().as_deref())
    }

    fn double_settlement_with(
        &self,
        env_value: Option<&str>,
    ) -> Result<DoubleSettlement, ConfigError> {
        match env_value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse::<DoubleSettlement>().map_err(|source| ConfigError::Env {
                var: DOUBLE_SETTLEMENT_ENV,
                source,
            }),
            None => Ok(self.file_double_settlement()),
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_path_with(env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
}

fn config_path_with(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| dirs::config_dir().map(|dir| dir.join("kinesis-promise").join("config.toml")))
}
