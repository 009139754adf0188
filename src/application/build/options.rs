//! Build Options
//!
//! Configuration types for build operations.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::{BaseUrl, HashLength};
use crate::error::WidgetpackResult;

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory scanned for entry modules
    pub source_dir: PathBuf,
    /// Output directory (removed and recreated)
    pub out_dir: PathBuf,
    /// Entry selection glob, relative to `source_dir`
    pub entry_glob: String,
    /// Base URL written into HTML shells
    pub base_url: BaseUrl,
    /// Hash length, or `None` to keep unhashed names
    pub hash_length: Option<HashLength>,
    /// Also write `<name>-<hash>.html`
    pub hashed_html: bool,
}

impl BuildOptions {
    pub fn new(source_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            out_dir: out_dir.into(),
            entry_glob: "**/index.{tsx,jsx}".to_string(),
            base_url: BaseUrl::default(),
            hash_length: Some(HashLength::DEFAULT),
            hashed_html: true,
        }
    }

    /// Options from a fully layered configuration
    pub fn from_config(config: &Config) -> WidgetpackResult<Self> {
        let hash_length = if config.hashing.enabled {
            Some(config.hashing.hash_length()?)
        } else {
            None
        };

        Ok(Self {
            source_dir: config.build.source_dir.clone(),
            out_dir: config.build.out_dir.clone(),
            entry_glob: config.build.entry_glob.clone(),
            base_url: config.base_url(),
            hash_length,
            hashed_html: config.hashing.hashed_html,
        })
    }

    pub fn with_entry_glob(mut self, glob: impl Into<String>) -> Self {
        self.entry_glob = glob.into();
        self
    }

    pub fn with_base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_hash_length(mut self, length: Option<HashLength>) -> Self {
        self.hash_length = length;
        self
    }

    pub fn with_hashed_html(mut self, hashed_html: bool) -> Self {
        self.hashed_html = hashed_html;
        self
    }

    pub fn hashing_enabled(&self) -> bool {
        self.hash_length.is_some()
    }
}
