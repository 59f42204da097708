//! Domain Services
//!
//! Pure decision logic over revision identities.
//! These services have no I/O dependencies and are easily testable.

mod retention;
mod round;

pub use retention::{order_most_recent_first, prune_candidates, PruneCandidates, RevEntry};
pub use round::{DeployRound, MarkerSnapshot};
