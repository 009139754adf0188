use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use widgetpack::config::{Config, CONFIG_FILE};

/// Project root plus its fully layered configuration
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    /// Invocation directory; CLI path flags are relative to it
    pub cwd: PathBuf,
    pub config: Config,
}

impl Project {
    /// Resolve a path given on the command line
    pub fn cli_path(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }
}

/// Locate the project root, load `widgetpack.toml` and apply env overrides
pub fn load(explicit_root: Option<&Path>, json: bool) -> Result<Project> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let root = match explicit_root {
        Some(root) if root.is_absolute() => root.to_path_buf(),
        Some(root) => cwd.join(root),
        None => discover_project_root(&cwd),
    };

    let (config, warnings) = Config::load_or_default(&root)
        .with_context(|| format!("failed to load {}", root.join(CONFIG_FILE).display()))?;

    for warning in &warnings {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            eprintln!("warning: {}", warning);
        }
    }

    Ok(Project {
        config: config.resolve_paths(&root),
        root,
        cwd,
    })
}

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `widgetpack.toml`
/// - `package.json` (the widget sources live in a JS package)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("package.json").is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("web/src/example")).unwrap();
        std::fs::write(root.join("web").join(CONFIG_FILE), "").unwrap();

        let start = root.join("web/src/example");
        assert_eq!(discover_project_root(&start), root.join("web"));
    }

    #[test]
    fn discover_project_root_uses_package_json() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::write(root.join("package.json"), "{}").unwrap();

        assert_eq!(discover_project_root(&root.join("src")), root.to_path_buf());
    }

    #[test]
    fn discover_project_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("nowhere");
        std::fs::create_dir_all(&start).unwrap();

        // tempdirs normally sit outside any repository
        let found = discover_project_root(&start);
        assert!(start.starts_with(&found));
    }
}
