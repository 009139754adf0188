//! Build output entities
//!
//! - `RawOutput` - what the bundler wrote, before hashing
//! - `Artifact` - the final, addressable result for one widget

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Bundler output for one entry, before hashing
///
/// Lives only for the duration of one build pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    name: String,
    js_path: PathBuf,
    css_path: Option<PathBuf>,
}

impl RawOutput {
    pub fn new(name: impl Into<String>, js_path: impl Into<PathBuf>, css_path: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            js_path: js_path.into(),
            css_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn js_path(&self) -> &Path {
        &self.js_path
    }

    pub fn css_path(&self) -> Option<&Path> {
        self.css_path.as_deref()
    }
}

/// Final build result for one widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    js_hash: Option<ContentHash>,
    css_hash: Option<ContentHash>,
    js_path: PathBuf,
    css_path: Option<PathBuf>,
    html_path: Option<PathBuf>,
    hashed_html_path: Option<PathBuf>,
}

impl Artifact {
    /// Artifact for hashed mode
    pub fn hashed(
        name: impl Into<String>,
        js_hash: ContentHash,
        js_path: impl Into<PathBuf>,
        css: Option<(ContentHash, PathBuf)>,
    ) -> Self {
        let (css_hash, css_path) = match css {
            Some((hash, path)) => (Some(hash), Some(path)),
            None => (None, None),
        };
        Self {
            name: name.into(),
            js_hash: Some(js_hash),
            css_hash,
            js_path: js_path.into(),
            css_path,
            html_path: None,
            hashed_html_path: None,
        }
    }

    /// Artifact for unhashed mode (raw paths are final)
    pub fn unhashed(raw: RawOutput) -> Self {
        Self {
            name: raw.name,
            js_hash: None,
            css_hash: None,
            js_path: raw.js_path,
            css_path: raw.css_path,
            html_path: None,
            hashed_html_path: None,
        }
    }

    /// Record where the HTML shells were written
    pub fn with_html(mut self, live: PathBuf, hashed: Option<PathBuf>) -> Self {
        self.html_path = Some(live);
        self.hashed_html_path = hashed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn js_hash(&self) -> Option<&ContentHash> {
        self.js_hash.as_ref()
    }

    pub fn css_hash(&self) -> Option<&ContentHash> {
        self.css_hash.as_ref()
    }

    pub fn js_path(&self) -> &Path {
        &self.js_path
    }

    pub fn css_path(&self) -> Option<&Path> {
        self.css_path.as_deref()
    }

    pub fn html_path(&self) -> Option<&Path> {
        self.html_path.as_deref()
    }

    pub fn hashed_html_path(&self) -> Option<&Path> {
        self.hashed_html_path.as_deref()
    }

    pub fn has_css(&self) -> bool {
        self.css_path.is_some()
    }

    /// File name of the JS asset (as referenced from HTML)
    pub fn js_file_name(&self) -> String {
        file_name_of(&self.js_path)
    }

    /// File name of the CSS asset, if any
    pub fn css_file_name(&self) -> Option<String> {
        self.css_path.as_deref().map(file_name_of)
    }

    /// Value recorded in the manifest: the JS hash, or the name when unhashed
    pub fn manifest_value(&self) -> &str {
        match &self.js_hash {
            Some(hash) => hash.as_str(),
            None => &self.name,
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
