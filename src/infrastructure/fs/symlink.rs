//! Symlink-backed references
//!
//! Implements the ReferenceStore port with symlinks. A new link is staged
//! under a unique temporary name next to the reference and renamed over it,
//! so readers never see the reference missing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::ReferenceStore;
use crate::error::{StoreError, StoreResult};

/// Symlink + rename implementation of [`ReferenceStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SymlinkReferences;

impl SymlinkReferences {
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceStore for SymlinkReferences {
    fn rebind(&self, reference: &Path, target: &Path) -> StoreResult<()> {
        let name = reference
            .file_name()
            .ok_or_else(|| StoreError::inconsistent(reference, "reference has no file name"))?;
        let parent = match reference.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // Link targets resolve against the link's directory, not the cwd.
        let target = std::path::absolute(target).map_err(StoreError::io("resolve", target))?;

        let prefix = format!(".{}.", name.to_string_lossy());
        let staged = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .make_in(parent, |staged| symlink(&target, staged))
            .map_err(StoreError::io("stage reference", reference))?;

        // The staged link is removed on drop if the rename fails.
        staged
            .persist(reference)
            .map_err(|e| StoreError::io("replace reference", reference)(e.error))?;

        tracing::debug!(
            reference = %reference.display(),
            target = %target.display(),
            "reference rebound"
        );
        Ok(())
    }

    fn read(&self, reference: &Path) -> StoreResult<Option<PathBuf>> {
        match fs::symlink_metadata(reference) {
            Ok(meta) if meta.file_type().is_symlink() => {}
            Ok(_) => {
                return Err(StoreError::inconsistent(
                    reference,
                    "exists but is not a reference",
                ))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io("inspect reference", reference)(e)),
        }

        let target =
            fs::read_link(reference).map_err(StoreError::io("read reference", reference))?;
        if target.is_absolute() {
            return Ok(Some(target));
        }
        let base = reference.parent().unwrap_or_else(|| Path::new(""));
        Ok(Some(base.join(target)))
    }

    fn remove(&self, reference: &Path) -> StoreResult<()> {
        if !self.is_reference(reference)? {
            if reference.symlink_metadata().is_ok() {
                return Err(StoreError::inconsistent(
                    reference,
                    "refusing to remove content that is not a reference",
                ));
            }
            return Ok(());
        }
        match fs::remove_file(reference) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io("remove reference", reference)(e)),
        }
    }

    fn is_reference(&self, path: &Path) -> StoreResult<bool> {
        match fs::symlink_metadata(path) {
            Ok(meta) => Ok(meta.file_type().is_symlink()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io("inspect", path)(e)),
        }
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
