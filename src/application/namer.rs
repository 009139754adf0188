//! Artifact Namer
//!
//! Digests raw bundler output and moves it to content-addressed names.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Artifact, RawOutput};
use crate::domain::services::asset_naming::{hashed_file_name, CSS_EXT, JS_EXT};
use crate::domain::value_objects::{ContentHash, HashLength};
use crate::error::{WidgetpackError, WidgetpackResult};
use crate::infrastructure::fs::LocalFs;

/// Digests of one widget's raw outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputHashes {
    pub js: ContentHash,
    pub css: Option<ContentHash>,
}

/// Hashes and renames raw outputs
#[derive(Debug, Clone, Default)]
pub struct ArtifactNamer {
    fs: LocalFs,
}

impl ArtifactNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest the bytes currently on disk for `raw`
    pub fn hash_outputs(&self, raw: &RawOutput, length: HashLength) -> WidgetpackResult<OutputHashes> {
        let js = ContentHash::of(&self.fs.read(raw.js_path())?, length);
        let css = match raw.css_path() {
            Some(path) => Some(ContentHash::of(&self.fs.read(path)?, length)),
            None => None,
        };
        Ok(OutputHashes { js, css })
    }

    /// Rename `raw` to its hashed file names
    ///
    /// Each file is moved with a single rename in the output directory.
    pub fn rename(&self, raw: &RawOutput, hashes: &OutputHashes) -> WidgetpackResult<Artifact> {
        let js_path = self.move_to(raw.name(), raw.js_path(), &hashes.js, JS_EXT)?;

        let css = match (raw.css_path(), &hashes.css) {
            (Some(path), Some(hash)) => {
                Some((hash.clone(), self.move_to(raw.name(), path, hash, CSS_EXT)?))
            }
            _ => None,
        };

        Ok(Artifact::hashed(raw.name(), hashes.js.clone(), js_path, css))
    }

    /// Hash then rename; with hashing disabled the raw paths are final
    pub fn finalize(&self, raw: RawOutput, length: Option<HashLength>) -> WidgetpackResult<Artifact> {
        match length {
            Some(length) => {
                let hashes = self.hash_outputs(&raw, length)?;
                self.rename(&raw, &hashes)
            }
            None => Ok(Artifact::unhashed(raw)),
        }
    }

    fn move_to(
        &self,
        widget: &str,
        from: &Path,
        hash: &ContentHash,
        ext: &str,
    ) -> WidgetpackResult<PathBuf> {
        let dir = from.parent().unwrap_or_else(|| Path::new("."));
        let to = dir.join(hashed_file_name(widget, hash, ext));

        let rename_error = || WidgetpackError::Rename {
            widget: widget.to_string(),
            from: from.to_path_buf(),
            to: to.clone(),
        };

        if !self.fs.is_file(from) {
            return Err(rename_error());
        }
        match self.fs.rename(from, &to) {
            Ok(()) => Ok(to),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(rename_error()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn raw_in(dir: &Path, name: &str, js: &str, css: Option<&str>) -> RawOutput {
        let js_path = dir.join(format!("{}.js", name));
        fs::write(&js_path, js).unwrap();
        let css_path = css.map(|content| {
            let path = dir.join(format!("{}.css", name));
            fs::write(&path, content).unwrap();
            path
        });
        RawOutput::new(name, js_path, css_path)
    }

    #[test]
    fn renames_js_and_css_to_hashed_names() {
        let dir = tempdir().unwrap();
        let raw = raw_in(dir.path(), "scoreboard", "console.log(1)", Some("body{}"));
        let namer = ArtifactNamer::new();

        let artifact = namer.finalize(raw, Some(HashLength::DEFAULT)).unwrap();

        let js_hash = ContentHash::of(b"console.log(1)", HashLength::DEFAULT);
        let css_hash = ContentHash::of(b"body{}", HashLength::DEFAULT);
        assert_eq!(artifact.js_hash(), Some(&js_hash));
        assert_eq!(artifact.css_hash(), Some(&css_hash));
        assert_eq!(artifact.js_file_name(), format!("scoreboard-{}.js", js_hash));
        assert!(artifact.js_path().exists());
        assert!(!dir.path().join("scoreboard.js").exists());
        assert!(!dir.path().join("scoreboard.css").exists());
    }

    #[test]
    fn js_and_css_hash_independently() {
        let dir = tempdir().unwrap();
        let raw = raw_in(dir.path(), "soccer", "same", Some("same"));

        let hashes = ArtifactNamer::new()
            .hash_outputs(&raw, HashLength::SHORT)
            .unwrap();

        assert_eq!(hashes.js.as_str().len(), 4);
        assert_eq!(Some(&hashes.js), hashes.css.as_ref());
    }

    #[test]
    fn unhashed_keeps_raw_paths() {
        let dir = tempdir().unwrap();
        let raw = raw_in(dir.path(), "example", "js", None);

        let artifact = ArtifactNamer::new().finalize(raw, None).unwrap();

        assert_eq!(artifact.js_path(), dir.path().join("example.js"));
        assert!(artifact.js_hash().is_none());
        assert!(dir.path().join("example.js").exists());
    }

    #[test]
    fn vanished_source_is_rename_error() {
        let dir = tempdir().unwrap();
        let raw = raw_in(dir.path(), "example", "js", None);
        let hashes = ArtifactNamer::new()
            .hash_outputs(&raw, HashLength::DEFAULT)
            .unwrap();
        fs::remove_file(raw.js_path()).unwrap();

        let err = ArtifactNamer::new().rename(&raw, &hashes).unwrap_err();

        match err {
            WidgetpackError::Rename { widget, from, to } => {
                assert_eq!(widget, "example");
                assert_eq!(from, dir.path().join("example.js"));
                assert_eq!(to, dir.path().join(format!("example-{}.js", hashes.js)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
