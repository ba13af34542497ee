//! Common test utilities for plugdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace, destination and user config directories
//! - Assertion macros: `assert_output_contains!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
