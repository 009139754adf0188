//! Entry point discovery
//!
//! Walks the widget source tree with the `ignore` walker (so `.gitignore`d
//! and hidden paths are skipped) and selects entry modules with a
//! gitignore-style glob such as `**/index.{tsx,jsx}`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::domain::entities::EntryPoint;
use crate::error::{WidgetpackError, WidgetpackResult};

/// Discover widget entry points under `source_dir`, sorted by path
///
/// Fails with `NoEntries` when nothing matches and with `DuplicateEntry`
/// when two entry files share a parent directory name.
pub fn discover_entries(source_dir: &Path, pattern: &str) -> WidgetpackResult<Vec<EntryPoint>> {
    if !source_dir.is_dir() {
        return Err(WidgetpackError::NoEntries {
            source_dir: source_dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    let mut builder = OverrideBuilder::new(source_dir);
    builder
        .add(pattern)
        .map_err(|e| invalid_glob(pattern, e))?;
    let matcher = builder.build().map_err(|e| invalid_glob(pattern, e))?;

    let walker = WalkBuilder::new(source_dir)
        .require_git(false)
        .filter_entry(|entry| entry.file_name() != "node_modules")
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for result in walker {
        let dir_entry = result.map_err(|e| WidgetpackError::Io(io::Error::other(e.to_string())))?;
        if !dir_entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = dir_entry.path();
        if !matcher.matched(path, false).is_whitelist() {
            continue;
        }

        let source_path = absolutize(path)?;
        let Some(entry) = EntryPoint::from_source(source_path) else {
            continue;
        };

        if let Some(first) = seen.get(entry.name()) {
            return Err(WidgetpackError::DuplicateEntry {
                name: entry.name().to_string(),
                first: first.clone(),
                second: entry.source_path().to_path_buf(),
            });
        }
        seen.insert(entry.name().to_string(), entry.source_path().to_path_buf());
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(WidgetpackError::NoEntries {
            source_dir: source_dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    Ok(entries)
}

fn invalid_glob(pattern: &str, err: ignore::Error) -> WidgetpackError {
    WidgetpackError::InvalidEntryGlob {
        pattern: pattern.to_string(),
        message: err.to_string(),
    }
}

fn absolutize(path: &Path) -> WidgetpackResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
