//! Domain Layer
//!
//! Pure revision-management logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (RevisionId, MarkerKind, RetentionWidth)
//! - `services/` - Pure decisions (pruning candidate selection, deploy round inference)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Reference rebinding goes through a trait-defined port

pub mod ports;
pub mod services;
pub mod value_objects;
