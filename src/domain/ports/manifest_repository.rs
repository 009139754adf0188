//! ManifestRepository port - abstraction for manifest persistence
//!
//! Lets the build use case save the manifest without knowing about the
//! JSON encoding or atomic-write details.

use std::path::Path;

use crate::domain::entities::Manifest;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug)]
pub enum ManifestError {
    /// Invalid manifest format
    InvalidFormat(String),
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::InvalidFormat(msg) => write!(f, "Invalid manifest format: {}", msg),
            ManifestError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<std::io::Error> for ManifestError {
    fn from(err: std::io::Error) -> Self {
        ManifestError::Io(err)
    }
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Write the manifest, replacing any previous one in a single step
    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()>;
}
