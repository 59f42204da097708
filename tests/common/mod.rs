//! Common test utilities for revroot contract and CLI tests.
//!
//! This module provides:
//! - `TestRoot`: an isolated revision root in a temp directory
//! - `TestResult`: captured output of a `revroot` invocation

#![allow(dead_code)]

pub mod env;

pub use env::*;
