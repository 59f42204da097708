//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `logging` - stderr diagnostics (via tracing-subscriber)
//! - `views` - text rendering of use case results

pub mod cli;
pub mod logging;
pub mod views;

pub use cli::{Cli, Commands, MarkerArg};
