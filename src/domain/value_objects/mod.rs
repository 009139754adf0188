//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod base_url;
mod config_warning;
mod hash;

pub use base_url::BaseUrl;
pub use config_warning::ConfigWarning;
pub use hash::{hash, ContentHash, HashLength};
