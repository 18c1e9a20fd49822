//! Runner configuration
//!
//! Loaded once at startup from JSON:
//!
//! ```json
//! {
//!     "risk": { "flag_policy": "literal" },
//!     "error_policy": "skip",
//!     "models": { "primary": "models/upro.json", "secondary": "models/voo.json" }
//! }
//! ```

use regime_risk_manager::RiskManagerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a session does when the risk manager fails on an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop the session and return the error
    #[default]
    Halt,
    /// Log, count the step as skipped, and continue
    Skip,
}

/// Locations of the two fitted model artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPaths {
    /// Read one step behind
    pub primary: PathBuf,
    /// Read at the latest observation
    pub secondary: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub risk: RiskManagerConfig,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    pub models: ModelPaths,
}

impl RunnerConfig {
    pub fn new(models: ModelPaths) -> Self {
        Self {
            risk: RiskManagerConfig::default(),
            error_policy: ErrorPolicy::default(),
            models,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
