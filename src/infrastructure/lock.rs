//! Deploy Lock
//!
//! Advisory exclusive lock on `<root>/.revroot.lock`, held by whoever is
//! driving a deployment round. The revision store itself takes no lock.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{StoreError, StoreResult};

pub const LOCK_FILE: &str = ".revroot.lock";

/// Held exclusive lock. Released on drop.
#[derive(Debug)]
pub struct DeployLock {
    file: File,
    path: PathBuf,
}

impl DeployLock {
    /// Block until the lock for `root` is acquired.
    pub fn acquire(root: &Path) -> StoreResult<Self> {
        let (file, path) = open_lock_file(root)?;
        file.lock_exclusive()
            .map_err(StoreError::io("lock", &path))?;
        tracing::debug!(lock = %path.display(), "deploy lock acquired");
        Ok(Self { file, path })
    }

    /// Acquire the lock for `root` without blocking; `None` if someone else holds it.
    pub fn try_acquire(root: &Path) -> StoreResult<Option<Self>> {
        let (file, path) = open_lock_file(root)?;
        match file.try_lock_exclusive() {
            Ok(()) => {
                tracing::debug!(lock = %path.display(), "deploy lock acquired");
                Ok(Some(Self { file, path }))
            }
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                tracing::debug!(lock = %path.display(), "deploy lock busy");
                Ok(None)
            }
            Err(e) => Err(StoreError::io("lock", &path)(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DeployLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

fn open_lock_file(root: &Path) -> StoreResult<(File, PathBuf)> {
    fs::create_dir_all(root).map_err(StoreError::io("create directory", root))?;
    let path = root.join(LOCK_FILE);
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)
        .map_err(StoreError::io("open lock file", &path))?;
    Ok((file, path))
}
