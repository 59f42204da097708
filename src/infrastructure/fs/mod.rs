//! File System Implementations
//!
//! Path resolution under the deployment root and the symlink-backed
//! implementation of the ReferenceStore port.

mod overlay;
mod path_space;
mod symlink;

pub use overlay::{ConfigOverlay, ENVIRONMENTS_DIR, OVERLAY_DIR};
pub use path_space::{PathSpace, TEMP_DIR};
pub use symlink::SymlinkReferences;
