//! Verify Use Case
//!
//! Re-derives everything from the output directory. The manifest is never
//! consulted; a build is only as good as the files it left behind.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use crate::domain::services::asset_naming::{matches_asset, plain_file_name, CSS_EXT, HTML_EXT, JS_EXT};
use crate::domain::services::{extract_references, ReferenceKind};
use crate::error::{WidgetpackError, WidgetpackResult};
use crate::infrastructure::fs::LocalFs;

use super::report::{VerificationFailure, VerificationReport, VerificationWarning, WidgetReport};

/// Verify use case - checks the artifact graph of a finished build
#[derive(Debug, Clone, Default)]
pub struct VerifyUseCase {
    fs: LocalFs,
}

impl VerifyUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every widget in `expected` against `out_dir`
    ///
    /// A missing output directory is not an error: every widget simply
    /// fails its checks.
    pub fn execute(&self, out_dir: &Path, expected: &[String]) -> WidgetpackResult<VerificationReport> {
        self.execute_with_callback(out_dir, expected, |_| {})
    }

    /// Execute with a callback per finished widget (for streaming UI)
    pub fn execute_with_callback<F>(
        &self,
        out_dir: &Path,
        expected: &[String],
        mut on_widget: F,
    ) -> WidgetpackResult<VerificationReport>
    where
        F: FnMut(&WidgetReport),
    {
        if expected.is_empty() {
            return Err(WidgetpackError::NoExpectedWidgets);
        }

        let files: BTreeSet<String> = match self.fs.list_file_names(out_dir) {
            Ok(names) => names.into_iter().collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeSet::new(),
            Err(e) => return Err(e.into()),
        };

        let mut report = VerificationReport {
            out_dir: out_dir.to_path_buf(),
            widgets: Vec::with_capacity(expected.len()),
        };
        for name in expected {
            let widget = self.verify_widget(out_dir, &files, name)?;
            on_widget(&widget);
            report.widgets.push(widget);
        }
        Ok(report)
    }

    fn verify_widget(
        &self,
        out_dir: &Path,
        files: &BTreeSet<String>,
        name: &str,
    ) -> WidgetpackResult<WidgetReport> {
        let mut widget = WidgetReport::new(name);

        widget.js_files = files
            .iter()
            .filter(|f| matches_asset(f, name, JS_EXT))
            .cloned()
            .collect();
        widget.css_files = files
            .iter()
            .filter(|f| matches_asset(f, name, CSS_EXT))
            .cloned()
            .collect();

        if widget.js_files.is_empty() {
            widget.failures.push(VerificationFailure::MissingJs);
        }
        if widget.css_files.is_empty() {
            widget.warnings.push(VerificationWarning::NoCss);
        }

        let html_file = plain_file_name(name, HTML_EXT);
        if !files.contains(&html_file) {
            widget
                .failures
                .insert(0, VerificationFailure::MissingHtml { file: html_file });
            return Ok(widget);
        }

        let bytes = self.fs.read(&out_dir.join(&html_file))?;
        let html = String::from_utf8_lossy(&bytes);
        for reference in extract_references(&html) {
            let file = reference.file_name();
            if files.contains(file) {
                continue;
            }
            let failure = match reference.kind {
                ReferenceKind::Script => VerificationFailure::BrokenJsReference {
                    file: file.to_string(),
                },
                ReferenceKind::Stylesheet => VerificationFailure::BrokenCssReference {
                    file: file.to_string(),
                },
            };
            widget.failures.push(failure);
        }

        Ok(widget)
    }
}
