//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BaseUrl, ConfigWarning, HashLength};
use crate::error::WidgetpackResult;

use super::loader;

/// Build layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory scanned for widget entry modules
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Output directory (cleared on every build)
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Glob (relative to `source_dir`) selecting entry modules
    #[serde(default = "default_entry_glob")]
    pub entry_glob: String,

    /// Origin prepended to asset references; blank means the default
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            out_dir: default_out_dir(),
            entry_glob: default_entry_glob(),
            base_url: None,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_entry_glob() -> String {
    "**/index.{tsx,jsx}".to_string()
}

/// Content hashing configuration
///
/// Replaces the separate "hashed" and "plain" build variants with one
/// switch plus a length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_hash_length")]
    pub length: usize,

    /// Also write `<name>-<hash>.html` next to `<name>.html`
    #[serde(default = "default_true")]
    pub hashed_html: bool,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            length: default_hash_length(),
            hashed_html: true,
        }
    }
}

impl HashingConfig {
    /// Validated hash length
    pub fn hash_length(&self) -> WidgetpackResult<HashLength> {
        HashLength::new(self.length)
    }
}

fn default_hash_length() -> usize {
    HashLength::DEFAULT.get()
}

/// Which bundler adapter compiles entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BundlerKind {
    /// Spawn the esbuild CLI
    #[default]
    Esbuild,
    /// Copy pre-built modules verbatim
    Passthrough,
}

impl BundlerKind {
    pub const VALUES: &'static [&'static str] = &["esbuild", "passthrough"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "esbuild" => Some(Self::Esbuild),
            "passthrough" | "copy" => Some(Self::Passthrough),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esbuild => "esbuild",
            Self::Passthrough => "passthrough",
        }
    }
}

/// Bundler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerConfig {
    #[serde(default)]
    pub kind: BundlerKind,

    /// Executable used by the esbuild adapter
    #[serde(default = "default_bundler_program")]
    pub program: String,

    /// Extra arguments appended to every esbuild invocation
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            kind: BundlerKind::default(),
            program: default_bundler_program(),
            args: Vec::new(),
        }
    }
}

fn default_bundler_program() -> String {
    "esbuild".to_string()
}

/// Verification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Widgets every build must contain
    #[serde(default = "default_expected_widgets")]
    pub widgets: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            widgets: default_expected_widgets(),
        }
    }
}

fn default_expected_widgets() -> Vec<String> {
    vec!["example".to_string(), "api-result".to_string()]
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Full widgetpack configuration (`widgetpack.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub hashing: HashingConfig,

    #[serde(default)]
    pub bundler: BundlerConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WidgetpackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WidgetpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `widgetpack.toml` from the project root (or defaults), then apply env overrides
    pub fn load_or_default(project_root: &Path) -> WidgetpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (WIDGETPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Normalized base URL
    pub fn base_url(&self) -> BaseUrl {
        BaseUrl::from_option(self.build.base_url.as_deref())
    }

    /// Resolve `source_dir` and `out_dir` against the project root
    pub fn resolve_paths(mut self, project_root: &Path) -> Self {
        if self.build.source_dir.is_relative() {
            self.build.source_dir = project_root.join(&self.build.source_dir);
        }
        if self.build.out_dir.is_relative() {
            self.build.out_dir = project_root.join(&self.build.out_dir);
        }
        self
    }
}
