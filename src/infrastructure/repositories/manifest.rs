//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port as a flat JSON object
//! (`{"<widget>": "<hash or name>"}`) with sorted keys.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::entities::Manifest;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::infrastructure::fs::LocalFs;

/// JSON-based manifest repository
///
/// Stores the manifest as `manifest.json` inside the output directory.
pub struct JsonManifestRepository {
    fs: LocalFs,
}

impl JsonManifestRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonManifestRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a manifest the way it is written to disk
pub fn render_manifest(manifest: &Manifest) -> ManifestResult<String> {
    let map: BTreeMap<&str, &str> = manifest.entries().collect();
    let mut content = serde_json::to_string_pretty(&map)
        .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;
    content.push('\n');
    Ok(content)
}

impl ManifestRepository for JsonManifestRepository {
    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        let content = render_manifest(manifest)?;
        self.fs.write_atomic(path, content.as_bytes())?;
        Ok(())
    }
}
