//! Command handlers for the revroot binary

pub mod context;
pub mod link;
pub mod prune;
pub mod resolve;
pub mod round;
pub mod setup;
pub mod status;
