//! widgetpack - content-addressed build and verification for embeddable widgets
//!
//! widgetpack discovers widget entry modules, bundles each one through an
//! external bundler, names the outputs after a digest of their bytes, writes
//! an HTML shell per widget plus a manifest, and can independently verify
//! that a finished output directory is internally consistent.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    resolve_widget_html, BuildOptions, BuildResult, BuildUseCase, VerificationReport,
    VerifyUseCase,
};
pub use config::{BundlerKind, Config};
pub use domain::entities::{Artifact, EntryPoint, Manifest};
pub use domain::value_objects::{hash, BaseUrl, ContentHash, HashLength};
pub use error::{WidgetpackError, WidgetpackResult};
