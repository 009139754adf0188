//! Widget Bundler Port
//!
//! Abstraction over the external JS/CSS bundler. Implementations write
//! `<name>.js` (and `<name>.css` when the widget has styles) into the
//! output directory; they never choose filenames on their own.

use std::path::Path;

use crate::domain::entities::EntryPoint;

/// Failure reported by a bundler for a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlerError {
    pub message: String,
}

impl BundlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BundlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BundlerError {}

/// A bundler that compiles one entry module into one JS file
///
/// Implementations:
/// - `EsbuildBundler` - spawns the esbuild CLI
/// - `PassthroughBundler` - copies pre-built modules
pub trait WidgetBundler {
    /// Short identifier used in progress output
    fn id(&self) -> &'static str;

    /// Compile `entry` into `out_dir/<name>.js` and optionally `out_dir/<name>.css`
    ///
    /// Must return only after all output files are on disk.
    fn bundle(&self, entry: &EntryPoint, out_dir: &Path) -> Result<(), BundlerError>;
}

impl<T: WidgetBundler + ?Sized> WidgetBundler for &T {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn bundle(&self, entry: &EntryPoint, out_dir: &Path) -> Result<(), BundlerError> {
        (**self).bundle(entry, out_dir)
    }
}

impl<T: WidgetBundler + ?Sized> WidgetBundler for Box<T> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn bundle(&self, entry: &EntryPoint, out_dir: &Path) -> Result<(), BundlerError> {
        (**self).bundle(entry, out_dir)
    }
}
