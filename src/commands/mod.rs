//! Subcommand implementations
//!
//! Each command loads the layered configuration, applies its flags, runs
//! one use case and renders the outcome as text or NDJSON.

pub mod build;
pub mod project;
pub mod resolve;
pub mod verify;
