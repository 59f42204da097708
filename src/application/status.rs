//! Status Use Case
//!
//! Gathers everything an operator needs to see about one root into a single
//! serializable report: markers, round state, revisions and what retention
//! would prune.

use std::ffi::OsStr;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::ReferenceStore;
use crate::domain::services::DeployRound;
use crate::domain::value_objects::{RetentionWidth, RevisionId};
use crate::error::StoreResult;
use crate::infrastructure::RevisionStore;

/// One revision directory as seen from the markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionEntry {
    pub name: String,
    pub path: PathBuf,
    /// `current` points here
    pub live: bool,
    /// `.done` points here
    pub done: bool,
    /// Outside the retention window and unprotected
    pub prunable: bool,
}

/// Snapshot of a revision root.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub root: PathBuf,
    pub environment: Option<String>,
    pub config_rev: Option<String>,
    pub retention: RetentionWidth,
    pub current: Option<RevisionId>,
    pub current_dir: Option<PathBuf>,
    pub done: Option<RevisionId>,
    pub in_progress: Option<RevisionId>,
    pub round: DeployRound,
    pub interrupted: Option<RevisionId>,
    pub revisions: Vec<RevisionEntry>,
}

impl StatusReport {
    pub fn prunable(&self) -> impl Iterator<Item = &RevisionEntry> {
        self.revisions.iter().filter(|r| r.prunable)
    }
}

/// Read-only: never takes the deploy lock.
pub struct StatusUseCase<'a, R: ReferenceStore> {
    store: &'a RevisionStore<R>,
}

impl<'a, R: ReferenceStore> StatusUseCase<'a, R> {
    pub fn new(store: &'a RevisionStore<R>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> StoreResult<StatusReport> {
        let store = self.store;
        let markers = store.markers()?;
        let current_dir = store.current_rev_dir()?;
        let prunable: Vec<PathBuf> = store.find_old_rev_dirs()?.collect();

        let revisions = store
            .rev_dirs()?
            .into_iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(OsStr::to_string_lossy)
                    .unwrap_or_default()
                    .into_owned();
                RevisionEntry {
                    live: is_named(markers.current.as_ref(), &name),
                    done: is_named(markers.done.as_ref(), &name),
                    prunable: prunable.contains(&path),
                    name,
                    path,
                }
            })
            .collect();

        Ok(StatusReport {
            root: store.paths().root().to_path_buf(),
            environment: store.overlay().environment().map(str::to_string),
            config_rev: store.config_rev().map(str::to_string),
            retention: store.retention(),
            round: markers.round(),
            interrupted: markers.interrupted().cloned(),
            current: markers.current,
            current_dir,
            done: markers.done,
            in_progress: markers.in_progress,
            revisions,
        })
    }
}

fn is_named(id: Option<&RevisionId>, name: &str) -> bool {
    id.is_some_and(|id| id.dir_name() == name)
}
