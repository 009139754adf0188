//! EntryPoint entity - one widget to compile
//!
//! The widget name is the name of the directory holding the entry module,
//! so `src/scoreboard/index.tsx` builds the `scoreboard` widget.

use std::path::{Path, PathBuf};

/// A discovered widget entry module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Widget name (unique per build)
    name: String,
    /// Absolute path to the entry source file
    source_path: PathBuf,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
        }
    }

    /// Derive the entry from its source path
    ///
    /// Returns `None` for paths without a named parent directory.
    pub fn from_source(source_path: impl Into<PathBuf>) -> Option<Self> {
        let source_path = source_path.into();
        let name = source_path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())?
            .to_string();
        Some(Self { name, source_path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
