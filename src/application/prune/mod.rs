//! Prune Use Case
//!
//! Removes revision directories that have fallen outside the retention
//! window. The store only names candidates; deletion happens here.

mod options;
mod result;
mod use_case;

pub use options::PruneOptions;
pub use result::{PruneFailure, PruneResult};
pub use use_case::PruneUseCase;
