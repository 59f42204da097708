//! Prune options

/// Options for the prune command
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneOptions {
    /// List candidates without deleting anything
    pub dry_run: bool,
}

impl PruneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
