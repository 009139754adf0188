//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Clean, discover, compile, hash, write HTML and manifest
//! - `VerifyUseCase` - Cross-check the output directory of a build
//! - `resolve_widget_html` - Locate the HTML shell to serve for a widget
//!
//! ## Services
//!
//! - `WidgetCompiler` - Bundler invocation plus output probing
//! - `ArtifactNamer` - Content hashing and renaming

pub mod build;
pub mod compiler;
pub mod namer;
pub mod resolve;
pub mod verify;

pub use build::{BuildOptions, BuildResult, BuildUseCase};
pub use compiler::WidgetCompiler;
pub use namer::{ArtifactNamer, OutputHashes};
pub use resolve::resolve_widget_html;
pub use verify::{
    VerificationFailure, VerificationReport, VerificationWarning, VerifyUseCase, WidgetReport,
};
