//! Environment overlay resolution
//!
//! Resources live under `<root>/scap/`. A named environment may shadow any of
//! them, path by path, from `<root>/scap/environments/<env>/`.

use std::path::{Path, PathBuf};

use super::path_space::PathSpace;

/// Directory under the root holding default resources.
pub const OVERLAY_DIR: &str = "scap";
/// Directory under [`OVERLAY_DIR`] holding per-environment overrides.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// Resolves resource paths, preferring the environment-specific copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOverlay {
    paths: PathSpace,
    environment: Option<String>,
}

impl ConfigOverlay {
    pub fn new(paths: PathSpace, environment: Option<String>) -> Self {
        Self { paths, environment }
    }

    pub fn paths(&self) -> &PathSpace {
        &self.paths
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// `<root>/scap`
    pub fn default_dir(&self) -> PathBuf {
        self.paths.path([OVERLAY_DIR])
    }

    /// `<root>/scap/environments/<env>`, when an environment is configured.
    pub fn environment_dir(&self) -> Option<PathBuf> {
        self.environment
            .as_deref()
            .map(|env| self.paths.path([OVERLAY_DIR, ENVIRONMENTS_DIR, env]))
    }

    /// The environment copy of `relative` if it exists, else the default path.
    ///
    /// The default path is returned whether or not it exists.
    pub fn env_specific_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if let Some(env_path) = self.environment_dir().map(|dir| dir.join(relative)) {
            if env_path.exists() {
                return env_path;
            }
        }
        self.default_dir().join(relative)
    }

    /// Search paths for `relative`, lowest priority first.
    ///
    /// With no segments, returns the search roots `[default_dir, environment_dir]`
    /// without checking existence. Otherwise returns whichever of
    /// `[default_path, environment_path]` exist, in that order.
    pub fn env_specific_paths<I>(&self, relative: I) -> Vec<PathBuf>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let relative: PathBuf = relative.into_iter().collect();
        let roots = std::iter::once(self.default_dir()).chain(self.environment_dir());

        if relative.as_os_str().is_empty() {
            return roots.collect();
        }

        roots
            .map(|dir| dir.join(&relative))
            .filter(|path| path.exists())
            .collect()
    }

    /// Log directory, resolved through the overlay.
    pub fn log_path(&self) -> PathBuf {
        self.env_specific_path("log")
    }
}
