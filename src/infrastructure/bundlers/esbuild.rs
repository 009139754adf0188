//! esbuild adapter
//!
//! Runs the esbuild CLI once per entry. esbuild writes the stylesheet
//! next to the script (`<name>.css`) whenever the entry imports CSS.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::entities::EntryPoint;
use crate::domain::ports::{BundlerError, WidgetBundler};
use crate::domain::services::asset_naming::{plain_file_name, JS_EXT};

/// Bundler that spawns `esbuild`
#[derive(Debug, Clone)]
pub struct EsbuildBundler {
    program: String,
    extra_args: Vec<String>,
}

impl EsbuildBundler {
    pub fn new(program: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            extra_args,
        }
    }

    /// Arguments passed to esbuild for `entry`
    pub fn command_args(&self, entry: &EntryPoint, out_dir: &Path) -> Vec<OsString> {
        let outfile = out_dir.join(plain_file_name(entry.name(), JS_EXT));

        let mut args: Vec<OsString> = vec![
            entry.source_path().as_os_str().to_owned(),
            "--bundle".into(),
            "--minify".into(),
            "--format=esm".into(),
            "--platform=browser".into(),
        ];
        let mut outfile_arg = OsString::from("--outfile=");
        outfile_arg.push(outfile.as_os_str());
        args.push(outfile_arg);
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }
}

impl Default for EsbuildBundler {
    fn default() -> Self {
        Self::new("esbuild", Vec::new())
    }
}

impl WidgetBundler for EsbuildBundler {
    fn id(&self) -> &'static str {
        "esbuild"
    }

    fn bundle(&self, entry: &EntryPoint, out_dir: &Path) -> Result<(), BundlerError> {
        let output = Command::new(&self.program)
            .args(self.command_args(entry, out_dir))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BundlerError::new(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with code {:?}", self.program, output.status.code()),
                text => text.to_string(),
            };
            return Err(BundlerError::new(message));
        }

        Ok(())
    }
}
