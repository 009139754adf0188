//! Configuration module for widgetpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WIDGETPACK_*, plus BASE_URL)
//! 3. Project config (widgetpack.toml)
//! 4. Built-in defaults (lowest priority)

pub mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_env_overrides_from, CONFIG_FILE};
pub use types::{
    BuildConfig, BundlerConfig, BundlerKind, ColorMode, Config, HashingConfig, OutputConfig,
    VerifyConfig,
};
