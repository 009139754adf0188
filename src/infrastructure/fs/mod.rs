//! File System Implementations
//!
//! Local file operations and entry discovery for the build pipeline.

mod discovery;
mod local;

pub use discovery::discover_entries;
pub use local::LocalFs;
