//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and entry discovery
//! - `bundlers/` - Bundler adapters (esbuild, passthrough)
//! - `repositories/` - Manifest persistence
//! - `events/` - Event sinks (NDJSON)

pub mod bundlers;
pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use bundlers::{bundler_for, EsbuildBundler, PassthroughBundler};
pub use events::JsonEventSink;
pub use fs::{discover_entries, LocalFs};
pub use repositories::JsonManifestRepository;
