//! Passthrough adapter
//!
//! For widgets whose entry is already a browser-ready ES module. The entry
//! is copied to `<name>.js`; a sibling `<entry-stem>.css` (or `styles.css`)
//! becomes `<name>.css`.

use std::path::{Path, PathBuf};

use crate::domain::entities::EntryPoint;
use crate::domain::ports::{BundlerError, WidgetBundler};
use crate::domain::services::asset_naming::{plain_file_name, CSS_EXT, JS_EXT};
use crate::infrastructure::fs::LocalFs;

const FALLBACK_STYLESHEET: &str = "styles.css";

/// Bundler that copies entries verbatim
#[derive(Debug, Clone, Default)]
pub struct PassthroughBundler {
    fs: LocalFs,
}

impl PassthroughBundler {
    pub fn new() -> Self {
        Self::default()
    }

    fn stylesheet_for(&self, entry: &EntryPoint) -> Option<PathBuf> {
        let source = entry.source_path();
        let dir = source.parent()?;
        let by_stem = source
            .file_stem()
            .map(|stem| dir.join(format!("{}.{}", stem.to_string_lossy(), CSS_EXT)));

        by_stem
            .into_iter()
            .chain(std::iter::once(dir.join(FALLBACK_STYLESHEET)))
            .find(|p| self.fs.is_file(p))
    }
}

impl WidgetBundler for PassthroughBundler {
    fn id(&self) -> &'static str {
        "passthrough"
    }

    fn bundle(&self, entry: &EntryPoint, out_dir: &Path) -> Result<(), BundlerError> {
        let js_out = out_dir.join(plain_file_name(entry.name(), JS_EXT));
        self.fs
            .copy_atomic(entry.source_path(), &js_out)
            .map_err(|e| {
                BundlerError::new(format!(
                    "cannot copy {}: {}",
                    entry.source_path().display(),
                    e
                ))
            })?;

        if let Some(css) = self.stylesheet_for(entry) {
            let css_out = out_dir.join(plain_file_name(entry.name(), CSS_EXT));
            self.fs
                .copy_atomic(&css, &css_out)
                .map_err(|e| BundlerError::new(format!("cannot copy {}: {}", css.display(), e)))?;
        }

        Ok(())
    }
}
