//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::value_objects::HashLength;
use crate::error::{WidgetpackError, WidgetpackResult};

use super::env_validator::{self, EnvVarValidator, BOOL_VALUES};
use super::types::{BundlerKind, Config};
use super::ConfigWarning;

/// Project configuration file name
pub const CONFIG_FILE: &str = "widgetpack.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WidgetpackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WidgetpackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Err(e) = config.hashing.hash_length() {
        return Err(WidgetpackError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `widgetpack.toml` from the project root or fall back to defaults
///
/// Environment overrides are applied in both cases. A config file that
/// exists but cannot be parsed is an error, never silently ignored.
pub fn load_or_default(project_root: &Path) -> WidgetpackResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (WIDGETPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary environment (for testing)
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    // WIDGETPACK_BASE_URL, falling back to the conventional BASE_URL
    if let Some(url) = get_env("WIDGETPACK_BASE_URL").or_else(|| get_env("BASE_URL")) {
        config.build.base_url = Some(url);
    }

    // WIDGETPACK_HASH
    if let Some(val) = get_env("WIDGETPACK_HASH") {
        let validator = EnvVarValidator::new("WIDGETPACK_HASH", BOOL_VALUES);
        config.hashing.enabled = validator.parse_with_writer(
            &val,
            env_validator::parse_bool,
            config.hashing.enabled,
            warnings,
        );
    }

    // WIDGETPACK_HASH_LENGTH
    if let Some(val) = get_env("WIDGETPACK_HASH_LENGTH") {
        let validator = EnvVarValidator::new("WIDGETPACK_HASH_LENGTH", &[]);
        config.hashing.length = validator.parse_with_writer(
            &val,
            |s| {
                s.trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| HashLength::new(n).ok())
                    .map(|l| l.get())
            },
            config.hashing.length,
            warnings,
        );
    }

    // WIDGETPACK_BUNDLER
    if let Some(val) = get_env("WIDGETPACK_BUNDLER") {
        let validator = EnvVarValidator::new("WIDGETPACK_BUNDLER", BundlerKind::VALUES);
        config.bundler.kind =
            validator.parse_with_writer(&val, BundlerKind::parse, config.bundler.kind, warnings);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "source_dir",
        "out_dir",
        "entry_glob",
        "base_url",
        "hashing",
        "enabled",
        "length",
        "hashed_html",
        "bundler",
        "kind",
        "program",
        "args",
        "verify",
        "widgets",
        "output",
        "color",
        "unicode",
    ];

    match env_validator::closest(unknown, CANDIDATES) {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
