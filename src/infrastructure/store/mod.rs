//! Revision Store
//!
//! Owns the on-disk lifecycle of deployed revisions under one root:
//!
//! ```text
//! <root>/revs/<id>/      one directory per revision, populated by the provisioner
//! <root>/current         reference to the live revision
//! <root>/.done           reference to the last revision that completed
//! <root>/.in-progress    reference to the revision being deployed
//! <root>/cache/          shared cache
//! ```
//!
//! The store only writes references. It never writes revision content and
//! never deletes revisions; `find_old_rev_dirs` names candidates and the
//! caller decides what to remove.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::ReferenceStore;
use crate::domain::services::{
    order_most_recent_first, prune_candidates, MarkerSnapshot, PruneCandidates, RevEntry,
};
use crate::domain::value_objects::{validate_config, MarkerKind, RetentionWidth, RevisionId};
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::fs::{ConfigOverlay, PathSpace, SymlinkReferences};

pub const REVS_DIR: &str = "revs";
pub const CACHE_DIR: &str = "cache";

/// Revision directories and the markers that reference them.
#[derive(Debug, Clone)]
pub struct RevisionStore<R = SymlinkReferences> {
    overlay: ConfigOverlay,
    references: R,
    retention: RetentionWidth,
    config_rev: Option<String>,
}

impl RevisionStore<SymlinkReferences> {
    /// Store rooted at `root`, with an optional overlay environment.
    pub fn new(root: impl Into<PathBuf>, environment: Option<String>) -> Self {
        Self::with_references(
            ConfigOverlay::new(PathSpace::new(root), environment),
            SymlinkReferences::new(),
        )
    }
}

impl<R: ReferenceStore> RevisionStore<R> {
    pub fn with_references(overlay: ConfigOverlay, references: R) -> Self {
        Self {
            overlay,
            references,
            retention: RetentionWidth::default(),
            config_rev: None,
        }
    }

    pub fn with_retention(mut self, retention: RetentionWidth) -> Self {
        self.retention = retention;
        self
    }

    pub fn retention(&self) -> RetentionWidth {
        self.retention
    }

    pub fn overlay(&self) -> &ConfigOverlay {
        &self.overlay
    }

    pub fn paths(&self) -> &PathSpace {
        self.overlay.paths()
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.paths().path([CACHE_DIR])
    }

    pub fn revs_dir(&self) -> PathBuf {
        self.paths().path([REVS_DIR])
    }

    pub fn current_link(&self) -> PathBuf {
        self.marker_path(MarkerKind::Current)
    }

    pub fn marker_path(&self, kind: MarkerKind) -> PathBuf {
        self.paths().path([kind.file_name()])
    }

    /// Create the root, scratch, revision and cache directories. Idempotent.
    pub fn setup(&self) -> StoreResult<()> {
        self.paths().setup()?;
        for dir in [self.revs_dir(), self.cache_dir()] {
            fs::create_dir_all(&dir).map_err(StoreError::io("create directory", &dir))?;
        }
        Ok(())
    }

    // --- addressing ---

    /// Address every later revision under `config_rev` for the life of this store.
    pub fn use_config_rev(&mut self, config_rev: impl Into<String>) -> StoreResult<()> {
        let config_rev = config_rev.into();
        validate_config(&config_rev)?;
        tracing::debug!(config_rev = %config_rev, "config revision active");
        self.config_rev = Some(config_rev);
        Ok(())
    }

    pub fn config_rev(&self) -> Option<&str> {
        self.config_rev.as_deref()
    }

    /// Identifier `code_rev` gets under the active addressing mode.
    pub fn rev_id(&self, code_rev: &str) -> StoreResult<RevisionId> {
        Ok(RevisionId::addressed(self.config_rev(), code_rev)?)
    }

    /// `revs/<code_rev>`, or `revs/<config_rev>_<code_rev>` with a config revision active.
    pub fn rev_path(&self, code_rev: &str) -> StoreResult<PathBuf> {
        Ok(self.id_path(&self.rev_id(code_rev)?))
    }

    fn id_path(&self, id: &RevisionId) -> PathBuf {
        self.revs_dir().join(id.dir_name())
    }

    // --- current ---

    /// Directory `current` points at, or `None` if unset or its target is gone.
    pub fn current_rev_dir(&self) -> StoreResult<Option<PathBuf>> {
        let link = self.current_link();
        let Some(target) = self.references.read(&link)? else {
            return Ok(None);
        };
        if target.is_dir() {
            Ok(Some(target))
        } else {
            tracing::warn!(link = %link.display(), target = %target.display(), "current reference is dangling");
            Ok(None)
        }
    }

    /// Config revision the live revision was deployed with, if any.
    pub fn current_config_rev(&self) -> StoreResult<Option<String>> {
        let Some(dir) = self.current_rev_dir()? else {
            return Ok(None);
        };
        let id = parse_rev_name(&self.current_link(), &dir)?;
        Ok(id.config_rev().map(str::to_string))
    }

    /// Recorded id of the live revision, even if its directory was pruned.
    pub fn rev_current(&self) -> StoreResult<Option<RevisionId>> {
        self.recorded(MarkerKind::Current)
    }

    /// Atomically point `current` at `rev_path(code_rev)`.
    pub fn mark_rev_current(&self, code_rev: &str) -> StoreResult<()> {
        let id = self.rev_id(code_rev)?;
        self.bind(&self.current_link(), &self.id_path(&id), false)?;
        tracing::info!(rev = %id, "revision is now current");
        Ok(())
    }

    // --- done / in progress ---

    pub fn mark_rev_done(&self, code_rev: &str) -> StoreResult<()> {
        self.mark(MarkerKind::Done, code_rev)
    }

    pub fn mark_rev_in_progress(&self, code_rev: &str) -> StoreResult<()> {
        self.mark(MarkerKind::InProgress, code_rev)
    }

    /// Drop the in-progress marker once a round has completed.
    pub fn clear_rev_in_progress(&self) -> StoreResult<()> {
        self.references
            .remove(&self.marker_path(MarkerKind::InProgress))?;
        tracing::debug!("in-progress marker cleared");
        Ok(())
    }

    /// Id last recorded as done. Stays valid after the directory is pruned.
    pub fn rev_done(&self) -> StoreResult<Option<RevisionId>> {
        self.recorded(MarkerKind::Done)
    }

    /// Id last recorded as in progress.
    pub fn rev_in_progress(&self) -> StoreResult<Option<RevisionId>> {
        self.recorded(MarkerKind::InProgress)
    }

    /// Directory of the done revision, or `None` if unset or pruned since.
    pub fn done_rev_dir(&self) -> StoreResult<Option<PathBuf>> {
        self.recorded_dir(MarkerKind::Done)
    }

    /// Directory of the in-progress revision, or `None` if unset or removed.
    pub fn in_progress_rev_dir(&self) -> StoreResult<Option<PathBuf>> {
        self.recorded_dir(MarkerKind::InProgress)
    }

    /// Recorded ids of all three markers.
    pub fn markers(&self) -> StoreResult<MarkerSnapshot> {
        Ok(MarkerSnapshot {
            current: self.rev_current()?,
            done: self.rev_done()?,
            in_progress: self.rev_in_progress()?,
        })
    }

    fn mark(&self, kind: MarkerKind, code_rev: &str) -> StoreResult<()> {
        let id = self.rev_id(code_rev)?;
        let marker = self.marker_path(kind);
        if lexists(&marker)? && !self.references.is_reference(&marker)? {
            return Err(StoreError::inconsistent(
                &marker,
                "exists but is not a reference",
            ));
        }
        self.references.rebind(&marker, &self.id_path(&id))?;
        tracing::debug!(marker = %kind, rev = %id, "marker recorded");
        Ok(())
    }

    fn recorded(&self, kind: MarkerKind) -> StoreResult<Option<RevisionId>> {
        let marker = self.marker_path(kind);
        match self.references.read(&marker)? {
            Some(target) => parse_rev_name(&marker, &target).map(Some),
            None => Ok(None),
        }
    }

    fn recorded_dir(&self, kind: MarkerKind) -> StoreResult<Option<PathBuf>> {
        let Some(id) = self.recorded(kind)? else {
            return Ok(None);
        };
        let dir = self.id_path(&id);
        if dir.is_dir() {
            Ok(Some(dir))
        } else {
            tracing::debug!(marker = %kind, rev = %id, "recorded revision no longer on disk");
            Ok(None)
        }
    }

    // --- retention ---

    /// Revision directories, most recently created first.
    pub fn rev_dirs(&self) -> StoreResult<Vec<PathBuf>> {
        Ok(self.ordered_entries()?.into_iter().map(|e| e.path).collect())
    }

    /// Revision directories that fall outside the retention window.
    ///
    /// The newest `retention` directories are never returned, nor are the
    /// directories `current` and `.done` reference. Nothing is deleted here.
    pub fn find_old_rev_dirs(&self) -> StoreResult<PruneCandidates> {
        let entries = self.ordered_entries()?;
        let protected: Vec<_> = [self.current_rev_dir()?, self.done_rev_dir()?]
            .into_iter()
            .flatten()
            .filter_map(|dir| dir.file_name().map(OsStr::to_os_string))
            .collect();

        tracing::debug!(
            revisions = entries.len(),
            keep = %self.retention,
            protected = protected.len(),
            "selecting pruning candidates"
        );
        Ok(prune_candidates(entries, self.retention, protected))
    }

    fn ordered_entries(&self) -> StoreResult<Vec<RevEntry>> {
        let revs = self.revs_dir();
        let listing = match fs::read_dir(&revs) {
            Ok(listing) => listing,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("read directory", &revs)(e)),
        };

        let mut entries = Vec::new();
        for entry in listing {
            let entry = entry.map_err(StoreError::io("read directory", &revs))?;
            let path = entry.path();
            let meta = entry.metadata().map_err(StoreError::io("inspect", &path))?;
            if !meta.is_dir() {
                continue;
            }
            let created = meta
                .created()
                .or_else(|_| meta.modified())
                .map_err(StoreError::io("read timestamps of", &path))?;
            entries.push(RevEntry::new(path, created));
        }

        order_most_recent_first(&mut entries);
        Ok(entries)
    }

    // --- promotion ---

    /// Atomically point an arbitrary `link_path` at `rev_path(code_rev)`.
    ///
    /// Missing parent directories are created. Existing ordinary content at
    /// `link_path` is refused with `AlreadyExists` unless `backup` is set, in
    /// which case whatever is there is moved to a timestamped sibling first.
    /// Returns the backup location when one was made.
    pub fn link_path_to_rev(
        &self,
        link_path: &Path,
        code_rev: &str,
        backup: bool,
    ) -> StoreResult<Option<PathBuf>> {
        let id = self.rev_id(code_rev)?;
        let moved = self.bind(link_path, &self.id_path(&id), backup)?;
        tracing::info!(link = %link_path.display(), rev = %id, "path linked to revision");
        Ok(moved)
    }

    fn bind(&self, link_path: &Path, target: &Path, backup: bool) -> StoreResult<Option<PathBuf>> {
        if let Some(parent) = link_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StoreError::io("create directory", parent))?;
        }

        let mut moved = None;
        if lexists(link_path)? {
            if backup {
                let dest = backup_path(link_path)?;
                fs::rename(link_path, &dest).map_err(StoreError::io("back up", link_path))?;
                tracing::info!(
                    path = %link_path.display(),
                    backup = %dest.display(),
                    "existing entry moved aside"
                );
                moved = Some(dest);
            } else if !self.references.is_reference(link_path)? {
                return Err(StoreError::AlreadyExists {
                    path: link_path.to_path_buf(),
                });
            }
        }

        self.references.rebind(link_path, target)?;
        Ok(moved)
    }
}

fn parse_rev_name(reference: &Path, target: &Path) -> StoreResult<RevisionId> {
    let name = target
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| {
            StoreError::inconsistent(
                reference,
                format!("target '{}' has no revision name", target.display()),
            )
        })?;
    RevisionId::parse(name).map_err(|e| StoreError::inconsistent(reference, e.to_string()))
}

fn lexists(path: &Path) -> StoreResult<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::io("inspect", path)(e)),
    }
}

/// Sibling of `path` suffixed with the current local time, made unique with
/// a counter if a backup from the same second already exists.
fn backup_path(path: &Path) -> StoreResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| StoreError::inconsistent(path, "cannot back up a path without a file name"))?
        .to_string_lossy()
        .into_owned();
    let base = format!("{}.{}", name, chrono::Local::now().format("%Y%m%d%H%M%S"));

    let mut candidate = path.with_file_name(&base);
    let mut n = 1u32;
    while lexists(&candidate)? {
        candidate = path.with_file_name(format!("{}.{}", base, n));
        n += 1;
    }
    Ok(candidate)
}
