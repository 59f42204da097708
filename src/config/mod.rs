//! Configuration module for revroot
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REVROOT_*)
//! 3. Environment overlay config (scap/environments/<env>/revroot.toml)
//! 4. Default overlay config (scap/revroot.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    environment_from_env, parse_keep, root_from_env, ConfigError, CONFIG_FILE, ENV_ENVIRONMENT,
    ENV_KEEP, ENV_LOG, ENV_ROOT,
};
pub use types::{Config, LinkConfig, LogConfig, RetentionConfig};
