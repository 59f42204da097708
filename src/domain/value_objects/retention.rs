//! Retention Width Value Object

use serde::{Deserialize, Serialize};

/// Number of most-recent revision directories that are never pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RetentionWidth(usize);

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("retention width must be at least 1, got {0}")]
pub struct RetentionWidthError(pub usize);

impl RetentionWidth {
    pub const DEFAULT: RetentionWidth = RetentionWidth(5);

    pub fn new(keep: usize) -> Result<Self, RetentionWidthError> {
        if keep == 0 {
            return Err(RetentionWidthError(keep));
        }
        Ok(RetentionWidth(keep))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for RetentionWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for RetentionWidth {
    type Error = RetentionWidthError;

    fn try_from(keep: usize) -> Result<Self, Self::Error> {
        Self::new(keep)
    }
}

impl From<RetentionWidth> for usize {
    fn from(width: RetentionWidth) -> Self {
        width.0
    }
}

impl std::fmt::Display for RetentionWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
