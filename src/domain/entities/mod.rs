//! Domain Entities
//!
//! - `EntryPoint` - A widget entry module discovered in the source tree
//! - `RawOutput` - Unhashed bundler output for one widget
//! - `Artifact` - Final hashed (or unhashed) assets for one widget
//! - `Manifest` - Widget name → hash record of a build

mod artifact;
mod entry_point;
mod manifest;

pub use artifact::{Artifact, RawOutput};
pub use entry_point::EntryPoint;
pub use manifest::Manifest;
