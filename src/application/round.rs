//! Deploy Round Use Case
//!
//! Drives one revision through `begin → promote → finish`. Every step runs
//! under the root's deploy lock so two deployers cannot interleave marker
//! writes. A step that finds the lock held fails instead of waiting.

use crate::domain::ports::ReferenceStore;
use crate::domain::services::{DeployRound, MarkerSnapshot};
use crate::domain::value_objects::RevisionId;
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::lock::LOCK_FILE;
use crate::infrastructure::{DeployLock, RevisionStore};

pub struct DeployRoundUseCase<'a, R: ReferenceStore> {
    store: &'a RevisionStore<R>,
}

impl<'a, R: ReferenceStore> DeployRoundUseCase<'a, R> {
    pub fn new(store: &'a RevisionStore<R>) -> Self {
        Self { store }
    }

    /// Record `code_rev` as in progress.
    ///
    /// Returns the revision an earlier round left unfinished, if any, so the
    /// caller can report it.
    pub fn begin(&self, code_rev: &str) -> StoreResult<Option<RevisionId>> {
        let _lock = self.lock()?;
        let previous = self.store.markers()?.interrupted().cloned();
        if let Some(rev) = &previous {
            tracing::warn!(rev = %rev, "previous round was interrupted");
        }
        self.store.setup()?;
        self.store.mark_rev_in_progress(code_rev)?;
        Ok(previous)
    }

    /// Make `code_rev` live. Its directory must already be populated.
    pub fn promote(&self, code_rev: &str) -> StoreResult<RevisionId> {
        let _lock = self.lock()?;
        let id = self.store.rev_id(code_rev)?;
        let path = self.store.rev_path(code_rev)?;
        if !path.is_dir() {
            return Err(StoreError::MissingRevision { path });
        }
        self.store.mark_rev_current(code_rev)?;
        Ok(id)
    }

    /// Record `code_rev` as done and close the round.
    ///
    /// An in-progress marker naming a different revision is left in place.
    pub fn finish(&self, code_rev: &str) -> StoreResult<RevisionId> {
        let _lock = self.lock()?;
        let id = self.store.rev_id(code_rev)?;
        self.store.mark_rev_done(code_rev)?;
        match self.store.rev_in_progress()? {
            Some(pending) if pending != id => {
                tracing::warn!(rev = %id, in_progress = %pending, "in-progress marker names another revision, keeping it");
            }
            _ => self.store.clear_rev_in_progress()?,
        }
        tracing::info!(rev = %id, "deploy round finished");
        Ok(id)
    }

    pub fn markers(&self) -> StoreResult<MarkerSnapshot> {
        self.store.markers()
    }

    pub fn state(&self) -> StoreResult<DeployRound> {
        Ok(self.store.markers()?.round())
    }

    fn lock(&self) -> StoreResult<DeployLock> {
        let root = self.store.paths().root();
        DeployLock::try_acquire(root)?.ok_or_else(|| StoreError::Locked {
            path: root.join(LOCK_FILE),
        })
    }
}
