//! Prune Use Case
//!
//! Walks the store's pruning candidates and removes each directory.
//! A failed removal is recorded and the walk continues.

use std::fs;

use crate::domain::ports::ReferenceStore;
use crate::error::StoreResult;
use crate::infrastructure::RevisionStore;

use super::options::PruneOptions;
use super::result::PruneResult;

pub struct PruneUseCase<'a, R: ReferenceStore> {
    store: &'a RevisionStore<R>,
}

impl<'a, R: ReferenceStore> PruneUseCase<'a, R> {
    pub fn new(store: &'a RevisionStore<R>) -> Self {
        Self { store }
    }

    /// Remove every candidate, or only list them when `dry_run` is set.
    ///
    /// Listing the candidates failing is an error; removing one failing is not.
    pub fn execute(&self, options: &PruneOptions) -> StoreResult<PruneResult> {
        let mut result = PruneResult::new(options.dry_run);

        for dir in self.store.find_old_rev_dirs()? {
            if options.dry_run {
                tracing::info!(rev = %dir.display(), "would prune");
                result.add_removed(dir);
                continue;
            }
            match fs::remove_dir_all(&dir) {
                Ok(()) => {
                    tracing::info!(rev = %dir.display(), "pruned");
                    result.add_removed(dir);
                }
                Err(e) => {
                    tracing::warn!(rev = %dir.display(), error = %e, "failed to prune");
                    result.add_failed(dir, e);
                }
            }
        }

        Ok(result)
    }
}
