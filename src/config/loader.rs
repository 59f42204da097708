//! Configuration loading
//!
//! Config files live in the overlay tree as `scap/revroot.toml` and
//! `scap/environments/<env>/revroot.toml`. The environment file overrides the
//! default one section by section.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, RetentionWidth};
use crate::infrastructure::fs::ConfigOverlay;

use super::types::Config;

/// File name looked up through the overlay.
pub const CONFIG_FILE: &str = "revroot.toml";

pub const ENV_ROOT: &str = "REVROOT_ROOT";
pub const ENV_ENVIRONMENT: &str = "REVROOT_ENV";
pub const ENV_KEEP: &str = "REVROOT_KEEP";
pub const ENV_LOG: &str = "REVROOT_LOG";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = read(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Merge overlay config files, lowest priority first.
///
/// A non-empty section in a higher layer replaces the whole section below it.
/// An empty section header (often left with commented-out examples) does not.
pub fn load_layered(overlay: &ConfigOverlay) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut merged = Config::default();
    let mut warnings = Vec::new();

    for path in overlay.env_specific_paths([CONFIG_FILE]) {
        let value: toml::Value = toml::from_str(&read(&path)?).map_err(|e| ConfigError::Parse {
            file: path.clone(),
            message: e.to_string(),
        })?;
        let Some(table) = value.as_table() else {
            continue;
        };

        let (parsed, file_warnings) = load_with_warnings(&path)?;
        warnings.extend(file_warnings);

        if has_non_empty_table(table, "retention") {
            merged.retention = parsed.retention;
        }
        if has_non_empty_table(table, "link") {
            merged.link = parsed.link;
        }
        if has_non_empty_table(table, "log") {
            merged.log = parsed.log;
        }
        tracing::debug!(file = %path.display(), "config layer applied");
    }

    Ok((merged, warnings))
}

/// Apply environment variable overrides (REVROOT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Result<Config, ConfigError> {
    // REVROOT_KEEP
    if let Ok(keep) = std::env::var(ENV_KEEP) {
        config.retention.keep = parse_keep(ENV_KEEP, &keep)?;
    }

    // REVROOT_LOG
    if let Ok(level) = std::env::var(ENV_LOG) {
        if !level.trim().is_empty() {
            config.log.level = level;
        }
    }

    Ok(config)
}

/// Deployment root from `REVROOT_ROOT`, if set.
pub fn root_from_env() -> Option<PathBuf> {
    std::env::var_os(ENV_ROOT)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Overlay environment from `REVROOT_ENV`, if set.
pub fn environment_from_env() -> Option<String> {
    std::env::var(ENV_ENVIRONMENT)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Parse a retention width given as text (env var or CLI flag).
pub fn parse_keep(key: &str, value: &str) -> Result<RetentionWidth, ConfigError> {
    let invalid = |message: String| ConfigError::Invalid {
        key: key.to_string(),
        message,
    };
    let keep: usize = value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(format!("'{}': {}", value, e)))?;
    RetentionWidth::new(keep).map_err(|e| invalid(e.to_string()))
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file: path.to_path_buf(),
        source,
    })
}

fn has_non_empty_table(root: &toml::map::Map<String, toml::Value>, key: &str) -> bool {
    match root.get(key) {
        Some(toml::Value::Table(t)) => !t.is_empty(),
        Some(_) => true,
        None => false,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["retention", "keep", "link", "backup", "log", "level"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
