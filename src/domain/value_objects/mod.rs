//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod marker;
mod retention;
mod revision_id;

pub use config_warning::ConfigWarning;
pub use marker::MarkerKind;
pub use retention::{RetentionWidth, RetentionWidthError};
pub use revision_id::{validate_config, RevisionId, RevisionIdError, CONFIG_REV_SEPARATOR};
