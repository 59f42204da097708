//! Retention service
//!
//! Decides which revision directories fall outside the retention horizon.
//! Pure: the caller lists the directories and performs any deletion.

use std::ffi::OsString;
use std::iter::FusedIterator;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::domain::value_objects::RetentionWidth;

/// A revision directory and the time it was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevEntry {
    pub path: PathBuf,
    pub created: SystemTime,
}

impl RevEntry {
    pub fn new(path: PathBuf, created: SystemTime) -> Self {
        Self { path, created }
    }
}

/// Sort entries most-recently-created first.
///
/// Equal timestamps fall back to descending name order so the result is
/// deterministic on filesystems with coarse time resolution.
pub fn order_most_recent_first(entries: &mut [RevEntry]) {
    entries.sort_by(|a, b| {
        b.created
            .cmp(&a.created)
            .then_with(|| b.path.file_name().cmp(&a.path.file_name()))
    });
}

/// Lazily yields pruning candidates in most-recent-first order.
///
/// Single pass: once drained it stays empty.
#[derive(Debug)]
pub struct PruneCandidates {
    tail: std::iter::Skip<std::vec::IntoIter<RevEntry>>,
    protected: Vec<OsString>,
}

impl PruneCandidates {
    fn is_protected(&self, entry: &RevEntry) -> bool {
        entry
            .path
            .file_name()
            .is_some_and(|name| self.protected.iter().any(|p| p.as_os_str() == name))
    }
}

impl Iterator for PruneCandidates {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = self.tail.next()?;
            if !self.is_protected(&entry) {
                return Some(entry.path);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tail.size_hint().1)
    }
}

impl FusedIterator for PruneCandidates {}

/// Select the entries that may be pruned.
///
/// `ordered` must already be most-recent-first. The first `keep` entries are
/// retained unconditionally; from the rest, any entry whose directory name is
/// in `protected` (the live and done revisions) is retained as well.
pub fn prune_candidates<I>(ordered: Vec<RevEntry>, keep: RetentionWidth, protected: I) -> PruneCandidates
where
    I: IntoIterator<Item = OsString>,
{
    PruneCandidates {
        tail: ordered.into_iter().skip(keep.get()),
        protected: protected.into_iter().collect(),
    }
}
