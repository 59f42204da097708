//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Path resolution, environment overlay, symlink references
//! - `store/` - The revision store built on top of them
//! - `lock` - Advisory deploy lock

pub mod fs;
pub mod lock;
pub mod store;

// Re-export for convenience
pub use fs::{ConfigOverlay, PathSpace, SymlinkReferences};
pub use lock::DeployLock;
pub use store::RevisionStore;
