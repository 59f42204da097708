//! Application Layer
//!
//! Use cases that orchestrate the revision store.
//! This layer:
//! - Depends on the Domain layer (services, ports, value objects)
//! - Does NOT contain retention or round rules (those are in Domain)
//! - Coordinates the store, the deploy lock and the filesystem
//!
//! ## Use Cases
//!
//! - `StatusUseCase` - Snapshot of markers, round state and retention
//! - `DeployRoundUseCase` - `begin → promote → finish` under the deploy lock
//! - `PruneUseCase` - Removes revisions outside the retention window

pub mod prune;
pub mod round;
pub mod status;

pub use prune::{PruneFailure, PruneOptions, PruneResult, PruneUseCase};
pub use round::DeployRoundUseCase;
pub use status::{RevisionEntry, StatusReport, StatusUseCase};
