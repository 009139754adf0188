//! Widget HTML resolution
//!
//! Finds the shell a serving layer should hand out for a widget: the live
//! `<name>.html`, otherwise the newest-sorting hashed shell.

use std::path::{Path, PathBuf};

use crate::domain::services::asset_naming::{matches_asset, plain_file_name, HTML_EXT};
use crate::error::{WidgetpackError, WidgetpackResult};
use crate::infrastructure::fs::LocalFs;

/// Locate the HTML shell for `name` inside `out_dir`
pub fn resolve_widget_html(out_dir: &Path, name: &str) -> WidgetpackResult<PathBuf> {
    let fs = LocalFs::new();
    if !out_dir.is_dir() {
        return Err(WidgetpackError::AssetsDirNotFound {
            path: out_dir.to_path_buf(),
        });
    }

    let live = out_dir.join(plain_file_name(name, HTML_EXT));
    if fs.is_file(&live) {
        return Ok(live);
    }

    // list_file_names is sorted, so the last match wins; the live name
    // itself was ruled out above
    let hashed = fs
        .list_file_names(out_dir)?
        .into_iter()
        .filter(|f| matches_asset(f, name, HTML_EXT))
        .next_back();

    match hashed {
        Some(file) => Ok(out_dir.join(file)),
        None => Err(WidgetpackError::WidgetHtmlNotFound { path: live }),
    }
}
