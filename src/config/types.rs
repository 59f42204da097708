//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, RetentionWidth};
use crate::infrastructure::fs::ConfigOverlay;

use super::loader::{self, ConfigError};

/// Retention configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RetentionConfig {
    /// Number of most recent revisions never offered for pruning
    #[serde(default)]
    pub keep: RetentionWidth,
}

/// Defaults for `link`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LinkConfig {
    /// Move existing content aside instead of refusing
    #[serde(default)]
    pub backup: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub retention: RetentionConfig,

    #[serde(default)]
    pub link: LinkConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Merge `revroot.toml` from the default and environment overlay directories.
    pub fn load_layered(overlay: &ConfigOverlay) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_layered(overlay)
    }

    /// Apply `REVROOT_*` environment variable overrides.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        loader::with_env_overrides(self)
    }
}
