//! Build Module
//!
//! Orchestrates the widget build: clean, discover, compile, hash, rename,
//! write HTML shells, write the manifest.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BuildOptions`)
//! - `result` - Result types (`BuildResult`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use widgetpack::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(bundler, JsonManifestRepository::new());
//! let result = use_case.execute(&BuildOptions::from_config(&config)?)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::BuildResult;
pub use use_case::BuildUseCase;
