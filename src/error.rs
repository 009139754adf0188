//! Error types for widgetpack
//!
//! Library code returns `WidgetpackError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for widgetpack operations
pub type WidgetpackResult<T> = Result<T, WidgetpackError>;

/// Main error type for widgetpack operations
#[derive(Error, Debug)]
pub enum WidgetpackError {
    /// Discovery found nothing to build
    #[error("no widget entry points matching '{pattern}' found under {source_dir}")]
    NoEntries { source_dir: PathBuf, pattern: String },

    /// Entry glob could not be compiled
    #[error("invalid entry glob '{pattern}': {message}")]
    InvalidEntryGlob { pattern: String, message: String },

    /// Two entry files resolve to the same widget name
    #[error("duplicate widget name '{name}': {first} and {second}")]
    DuplicateEntry {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Cleaning the output directory would delete the widget sources
    #[error("output directory {out_dir} contains the source directory {source_dir}; refusing to clean it")]
    OutputContainsSource { out_dir: PathBuf, source_dir: PathBuf },

    /// The bundler rejected an entry
    #[error("failed to compile widget '{widget}': {message}")]
    Compile { widget: String, message: String },

    /// The bundler reported success but produced no JS
    #[error("bundler reported success for '{widget}' but {path} was not written")]
    MissingOutput { widget: String, path: PathBuf },

    /// A raw output vanished before it could be renamed
    #[error("cannot rename {from} to {to} for widget '{widget}': source file not found")]
    Rename {
        widget: String,
        from: PathBuf,
        to: PathBuf,
    },

    /// Manifest could not be written or read
    #[error("manifest error at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Hash length outside the digest range
    #[error("invalid hash length {0}: must be between 1 and 64")]
    InvalidHashLength(usize),

    /// Verification was asked to check nothing
    #[error("no widgets to verify - set [verify] widgets in widgetpack.toml or pass --widget")]
    NoExpectedWidgets,

    /// Output directory does not exist
    #[error("assets directory not found: {path} - run `widgetpack build` to generate the assets")]
    AssetsDirNotFound { path: PathBuf },

    /// No HTML shell for the requested widget
    #[error("widget HTML not found: {path} - run `widgetpack build` to generate widget assets")]
    WidgetHtmlNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WidgetpackError {
    /// Name of the widget this error is attributed to, if any
    pub fn widget(&self) -> Option<&str> {
        match self {
            Self::Compile { widget, .. }
            | Self::MissingOutput { widget, .. }
            | Self::Rename { widget, .. } => Some(widget),
            Self::DuplicateEntry { name, .. } => Some(name),
            _ => None,
        }
    }
}
