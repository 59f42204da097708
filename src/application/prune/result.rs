//! Prune result types

use std::path::PathBuf;

use serde::Serialize;

/// A candidate that could not be removed
#[derive(Debug, Clone, Serialize)]
pub struct PruneFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a prune operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct PruneResult {
    /// Directories removed (or that would be removed in a dry run)
    pub removed: Vec<PathBuf>,
    pub failed: Vec<PruneFailure>,
    pub dry_run: bool,
}

impl PruneResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn add_failed(&mut self, path: PathBuf, error: impl ToString) {
        self.failed.push(PruneFailure {
            path,
            error: error.to_string(),
        });
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
