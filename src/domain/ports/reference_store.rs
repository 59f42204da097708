//! ReferenceStore port - abstraction over atomically rebindable references
//!
//! A reference is a named filesystem entry that points at a revision
//! directory. Rebinding must be observed by any concurrent reader as either
//! the old target or the new one, never as a missing entry.

use std::path::{Path, PathBuf};

use crate::error::StoreResult;

/// Atomically rebindable named references.
///
/// Implementations:
/// - `SymlinkReferences` - symlink staged under a temporary name, then renamed over
pub trait ReferenceStore {
    /// Bind `reference` to `target`, replacing any previous binding atomically.
    ///
    /// The caller guarantees `reference` is either absent or already a reference.
    fn rebind(&self, reference: &Path, target: &Path) -> StoreResult<()>;

    /// Target named by `reference`, or `None` if the reference is absent.
    ///
    /// The target may no longer exist. An entry at `reference` that is not a
    /// reference is an inconsistent state.
    fn read(&self, reference: &Path) -> StoreResult<Option<PathBuf>>;

    /// Remove `reference`. Removing an absent reference succeeds.
    fn remove(&self, reference: &Path) -> StoreResult<()>;

    /// Whether `path` currently holds a reference (as opposed to ordinary content).
    fn is_reference(&self, path: &Path) -> StoreResult<bool>;
}
