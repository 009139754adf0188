//! Widget Compiler
//!
//! Runs the configured bundler for one entry point, then checks the disk
//! for what it actually produced.

use std::path::Path;

use crate::domain::entities::{EntryPoint, RawOutput};
use crate::domain::ports::WidgetBundler;
use crate::domain::services::asset_naming::{plain_file_name, CSS_EXT, JS_EXT};
use crate::error::{WidgetpackError, WidgetpackResult};
use crate::infrastructure::fs::LocalFs;

/// Compiles entry points into unhashed `<name>.js` / `<name>.css`
pub struct WidgetCompiler<B: WidgetBundler> {
    bundler: B,
    fs: LocalFs,
}

impl<B: WidgetBundler> WidgetCompiler<B> {
    pub fn new(bundler: B) -> Self {
        Self {
            bundler,
            fs: LocalFs::new(),
        }
    }

    /// Identifier of the underlying bundler
    pub fn bundler_id(&self) -> &'static str {
        self.bundler.id()
    }

    /// Compile a single entry into `out_dir`
    ///
    /// Bundler failures are not retried.
    pub fn compile(&self, entry: &EntryPoint, out_dir: &Path) -> WidgetpackResult<RawOutput> {
        self.bundler
            .bundle(entry, out_dir)
            .map_err(|e| WidgetpackError::Compile {
                widget: entry.name().to_string(),
                message: e.message,
            })?;

        let js_path = out_dir.join(plain_file_name(entry.name(), JS_EXT));
        if !self.fs.is_file(&js_path) {
            return Err(WidgetpackError::MissingOutput {
                widget: entry.name().to_string(),
                path: js_path,
            });
        }

        let css_path = out_dir.join(plain_file_name(entry.name(), CSS_EXT));
        let css_path = self.fs.is_file(&css_path).then_some(css_path);

        Ok(RawOutput::new(entry.name(), js_path, css_path))
    }
}
