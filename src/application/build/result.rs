//! Build Result

use std::path::PathBuf;

use crate::domain::entities::{Artifact, Manifest};

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// One artifact per widget, in build order
    pub artifacts: Vec<Artifact>,
    /// What was written to `manifest.json`
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

impl BuildResult {
    pub fn widget_count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name() == name)
    }
}
