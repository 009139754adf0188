//! Test environment for isolated widgetpack runs.
//!
//! `TestEnv` owns a temporary project root and runs the widgetpack binary
//! inside it with a scrubbed environment.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::PASSTHROUGH_CONFIG;

/// Variables that would leak host configuration into a test run
const SCRUBBED_ENV: &[&str] = &[
    "WIDGETPACK_BASE_URL",
    "BASE_URL",
    "WIDGETPACK_HASH",
    "WIDGETPACK_HASH_LENGTH",
    "WIDGETPACK_BUNDLER",
    "GITHUB_ACTIONS",
    "CI",
];

/// Result of running a widgetpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated project sandbox
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project with no config file
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_widgetpack")),
        }
    }

    /// Project configured for the passthrough bundler
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_project_file("widgetpack.toml", PASSTHROUGH_CONFIG);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path under the default output directory
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.project_path("assets").join(file)
    }

    /// Add `src/<name>/index.js` and optionally `src/<name>/index.css`
    pub fn widget(&self, name: &str, js: &str, css: Option<&str>) -> &Self {
        self.write_project_file(&format!("src/{}/index.js", name), js);
        if let Some(css) = css {
            self.write_project_file(&format!("src/{}/index.css", name), css);
        }
        self
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_asset(&self, file: &str) -> String {
        std::fs::read_to_string(self.asset_path(file))
            .unwrap_or_else(|e| panic!("Failed to read asset {}: {}", file, e))
    }

    /// Sorted file names in the output directory
    pub fn asset_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(self.project_path("assets")) {
            Ok(entries) => entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// Parsed `assets/manifest.json`
    pub fn manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_asset("manifest.json")).expect("manifest is valid JSON")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args).env("NO_COLOR", "1");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute widgetpack");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
