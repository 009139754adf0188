//! Common test utilities for widgetpack CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project sandbox plus helpers to run the binary
//! - Assertion macros: `assert_asset!`, `assert_no_asset!`, `assert_output_contains!`
//! - Fixtures: Reusable widget sources and config files

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
