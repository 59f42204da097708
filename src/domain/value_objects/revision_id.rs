//! Revision Identifier Value Object
//!
//! A deployed revision is addressed either by a bare code revision or by a
//! (config revision, code revision) pair. The pair serializes to
//! `<config>_<code>` so one code revision can be deployed against several
//! configuration bundles without its directories colliding.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Separator between the config and code parts of a compound id.
pub const CONFIG_REV_SEPARATOR: char = '_';

/// Errors raised while building or parsing a [`RevisionId`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RevisionIdError {
    #[error("{what} revision must not be empty")]
    Empty { what: &'static str },

    #[error("{what} revision '{value}' is not a valid directory name")]
    InvalidSegment { what: &'static str, value: String },

    #[error("config revision '{value}' must not contain '_'")]
    SeparatorInConfig { value: String },

    #[error("'{name}' is not a revision id")]
    Malformed { name: String },
}

/// Identifier of one revision directory under `revs/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RevisionId {
    /// A code revision deployed without a config revision
    Code(String),
    /// A code revision deployed against a specific config revision
    Compound { config: String, code: String },
}

impl RevisionId {
    /// Bare code revision.
    pub fn code(code: impl Into<String>) -> Result<Self, RevisionIdError> {
        let code = code.into();
        validate_segment("code", &code)?;
        Ok(RevisionId::Code(code))
    }

    /// Compound (config, code) revision.
    pub fn compound(
        config: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, RevisionIdError> {
        let config = config.into();
        let code = code.into();
        validate_config(&config)?;
        validate_segment("code", &code)?;
        Ok(RevisionId::Compound { config, code })
    }

    /// Address `code` under the active config revision, if any.
    pub fn addressed(config: Option<&str>, code: &str) -> Result<Self, RevisionIdError> {
        match config {
            Some(config) => Self::compound(config, code),
            None => Self::code(code),
        }
    }

    /// Parse a revision directory name.
    ///
    /// Names containing the separator are split on its first occurrence into
    /// a compound id; both halves must be non-empty.
    pub fn parse(name: &str) -> Result<Self, RevisionIdError> {
        let malformed = || RevisionIdError::Malformed {
            name: name.to_string(),
        };

        match name.split_once(CONFIG_REV_SEPARATOR) {
            Some((config, code)) if !config.is_empty() && !code.is_empty() => {
                Self::compound(config, code).map_err(|_| malformed())
            }
            Some(_) => Err(malformed()),
            None => Self::code(name).map_err(|_| malformed()),
        }
    }

    pub fn code_rev(&self) -> &str {
        match self {
            RevisionId::Code(code) => code,
            RevisionId::Compound { code, .. } => code,
        }
    }

    pub fn config_rev(&self) -> Option<&str> {
        match self {
            RevisionId::Code(_) => None,
            RevisionId::Compound { config, .. } => Some(config),
        }
    }

    /// Directory name under `revs/`.
    pub fn dir_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionId::Code(code) => write!(f, "{}", code),
            RevisionId::Compound { config, code } => {
                write!(f, "{}{}{}", config, CONFIG_REV_SEPARATOR, code)
            }
        }
    }
}

impl FromStr for RevisionId {
    type Err = RevisionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RevisionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check a config revision before it is used to address directories.
pub fn validate_config(config: &str) -> Result<(), RevisionIdError> {
    validate_segment("config", config)?;
    if config.contains(CONFIG_REV_SEPARATOR) {
        return Err(RevisionIdError::SeparatorInConfig {
            value: config.to_string(),
        });
    }
    Ok(())
}

fn validate_segment(what: &'static str, value: &str) -> Result<(), RevisionIdError> {
    if value.is_empty() {
        return Err(RevisionIdError::Empty { what });
    }
    if value == "." || value == ".." || value.contains(['/', '\\', '\0']) {
        return Err(RevisionIdError::InvalidSegment {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}
