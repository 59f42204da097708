//! Error types for revroot
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.
//!
//! A missing reference or overlay target is never an error here: read
//! accessors report it as `Ok(None)`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::value_objects::RevisionIdError;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Main error type for revision store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Target path holds ordinary content and no backup was requested
    #[error("'{path}' already exists and is not a revision reference (use backup to move it aside)")]
    AlreadyExists { path: PathBuf },

    /// Filesystem failure, propagated verbatim with the operation that hit it
    #[error("failed to {op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A marker or reference exists but does not have the expected shape
    #[error("inconsistent state at '{path}': {message}")]
    InconsistentState { path: PathBuf, message: String },

    /// Promotion requested for a revision the provisioner never populated
    #[error("revision directory '{path}' does not exist")]
    MissingRevision { path: PathBuf },

    /// Another process holds the deploy lock for this root
    #[error("deploy lock '{path}' is held by another process")]
    Locked { path: PathBuf },

    /// A caller-supplied revision is not usable as a directory name
    #[error(transparent)]
    InvalidRevision(#[from] RevisionIdError),

    /// IO error without path context
    #[error("IO error: {0}")]
    Other(#[from] std::io::Error),
}

impl StoreError {
    /// Build a mapper for `map_err` that tags an IO error with its operation and path.
    pub fn io(op: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
        let path = path.to_path_buf();
        move |source| StoreError::Io { op, path, source }
    }

    pub fn inconsistent(path: &Path, message: impl Into<String>) -> Self {
        StoreError::InconsistentState {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// True for the `AlreadyExists` refusal of `link_path_to_rev`.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists { .. })
    }
}
