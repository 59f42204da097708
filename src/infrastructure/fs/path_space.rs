//! Root-relative path resolution and scratch-space lifecycle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Name of the scratch directory under the root.
pub const TEMP_DIR: &str = "tmp";

/// Resolves paths against a fixed deployment root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpace {
    root: PathBuf,
}

impl PathSpace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root joined with `segments`; no segments yields the root itself.
    pub fn path<I>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut path = self.root.clone();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    /// `<root>/tmp` joined with `segments`.
    pub fn temp_path<I>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut path = self.root.join(TEMP_DIR);
        for segment in segments {
            path.push(segment);
        }
        path
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.root.join(TEMP_DIR)
    }

    /// Create the root and its scratch directory. Idempotent.
    pub fn setup(&self) -> StoreResult<()> {
        let temp = self.temp_dir();
        fs::create_dir_all(&temp).map_err(StoreError::io("create directory", &temp))?;
        tracing::debug!(root = %self.root.display(), "path space ready");
        Ok(())
    }

    /// Remove everything inside the scratch directory, keeping the directory.
    ///
    /// A missing scratch directory is not an error.
    pub fn cleanup(&self) -> StoreResult<()> {
        let temp = self.temp_dir();
        let entries = match fs::read_dir(&temp) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(StoreError::io("read directory", &temp)(e)),
        };

        let mut removed = 0usize;
        for entry in entries {
            let entry = entry.map_err(StoreError::io("read directory", &temp))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(StoreError::io("inspect", &path))?;
            if file_type.is_dir() {
                fs::remove_dir_all(&path).map_err(StoreError::io("remove directory", &path))?;
            } else {
                fs::remove_file(&path).map_err(StoreError::io("remove file", &path))?;
            }
            removed += 1;
        }

        tracing::debug!(removed, temp = %temp.display(), "scratch space cleared");
        Ok(())
    }
}
