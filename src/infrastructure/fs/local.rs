//! Local File System Implementation
//!
//! Atomic writes (tempfile + rename in the target directory), atomic
//! renames and clean-directory handling for the build output.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Local file system operations used by the build pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path` atomically
    ///
    /// The temp file is created next to the target so the final rename
    /// never crosses a filesystem boundary. Readers see either the old
    /// file or the complete new one.
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Rename `from` to `to` in one step (same directory, no copy)
    pub fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    /// Remove `dir` with everything in it, then recreate it empty
    pub fn clean_dir(&self, dir: &Path) -> io::Result<()> {
        match fs::remove_dir_all(dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::create_dir_all(dir)
    }

    pub fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    pub fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Copy `from` to `to` atomically
    pub fn copy_atomic(&self, from: &Path, to: &Path) -> io::Result<()> {
        let content = fs::read(from)?;
        self.write_atomic(to, &content)
    }

    /// Names of the regular files directly inside `dir`, sorted
    pub fn list_file_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
