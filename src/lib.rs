//! revroot - on-host revision store for fleet deployments
//!
//! Every deployed revision lives in its own directory under `<root>/revs/`.
//! Symbolic references (`current`, `.done`, `.in-progress`) record which
//! revision is live, which last completed and which is being deployed, and
//! are swapped atomically so a crash never leaves a half-written marker.
//!
//! ## Layers
//!
//! - `domain` - revision ids, markers, retention and round rules (no I/O)
//! - `infrastructure` - path space, environment overlay, symlink references,
//!   the revision store and the deploy lock
//! - `application` - status, deploy round and prune use cases
//! - `config` - layered `revroot.toml` loading
//! - `presentation` - CLI parsing, logging and text views

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::services::DeployRound;
pub use domain::value_objects::{MarkerKind, RetentionWidth, RevisionId};
pub use error::{StoreError, StoreResult};
pub use infrastructure::{ConfigOverlay, DeployLock, PathSpace, RevisionStore, SymlinkReferences};
