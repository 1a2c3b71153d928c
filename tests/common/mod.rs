//! Common test utilities for actgen CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: Reusable store content constants

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
