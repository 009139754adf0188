//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod manifest_repository;
pub mod widget_bundler;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use widget_bundler::{BundlerError, WidgetBundler};
