//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Remove and recreate the output directory
//! 2. Discover entry points
//! 3. For each entry: compile, hash, rename, write HTML shell(s)
//! 4. Write the manifest once every widget succeeded
//!
//! Any failure aborts the build before the manifest is written.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::compiler::WidgetCompiler;
use crate::application::namer::ArtifactNamer;
use crate::domain::entities::{Artifact, EntryPoint, Manifest};
use crate::domain::ports::{
    BuildEvent, BuildEventSink, ManifestRepository, NoopEventSink, WidgetBundler,
};
use crate::domain::services::asset_naming::{
    hashed_file_name, plain_file_name, HTML_EXT, MANIFEST_FILE,
};
use crate::domain::services::generate_html;
use crate::error::{WidgetpackError, WidgetpackResult};
use crate::infrastructure::fs::{discover_entries, LocalFs};

use super::options::BuildOptions;
use super::result::BuildResult;

/// Build use case - orchestrates the widget build
///
/// Parameterized by its ports so tests can swap in an in-process bundler
/// and manifest store.
pub struct BuildUseCase<B, R>
where
    B: WidgetBundler,
    R: ManifestRepository,
{
    compiler: WidgetCompiler<B>,
    namer: ArtifactNamer,
    manifest_repo: R,
    fs: LocalFs,
}

impl<B, R> BuildUseCase<B, R>
where
    B: WidgetBundler,
    R: ManifestRepository,
{
    pub fn new(bundler: B, manifest_repo: R) -> Self {
        Self {
            compiler: WidgetCompiler::new(bundler),
            namer: ArtifactNamer::new(),
            manifest_repo,
            fs: LocalFs::new(),
        }
    }

    /// Execute the build without progress reporting
    pub fn execute(&self, options: &BuildOptions) -> WidgetpackResult<BuildResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the build, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &BuildOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> WidgetpackResult<BuildResult> {
        if contains_path(&options.out_dir, &options.source_dir) {
            return Err(WidgetpackError::OutputContainsSource {
                out_dir: options.out_dir.clone(),
                source_dir: options.source_dir.clone(),
            });
        }
        self.fs.clean_dir(&options.out_dir)?;

        event_sink.on_event(BuildEvent::Started {
            source_dir: options.source_dir.clone(),
            out_dir: options.out_dir.clone(),
            hashing: options.hashing_enabled(),
            bundler: self.compiler.bundler_id().to_string(),
        });

        let entries = discover_entries(&options.source_dir, &options.entry_glob)?;

        event_sink.on_event(BuildEvent::Discovered {
            names: entries.iter().map(|e| e.name().to_string()).collect(),
        });

        let mut artifacts = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if event_sink.wants_detailed_events() {
                event_sink.on_event(BuildEvent::WidgetStarted {
                    index,
                    name: entry.name().to_string(),
                });
            }

            let artifact = match self.build_widget(entry, options) {
                Ok(artifact) => artifact,
                Err(e) => {
                    event_sink.on_event(BuildEvent::WidgetFailed {
                        index,
                        name: entry.name().to_string(),
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            };

            event_sink.on_event(BuildEvent::WidgetBuilt {
                index,
                name: artifact.name().to_string(),
                js: artifact.js_path().to_path_buf(),
                css: artifact.css_path().map(|p| p.to_path_buf()),
                html: artifact
                    .html_path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_default(),
                hash: artifact.js_hash().map(|h| h.to_string()),
            });
            artifacts.push(artifact);
        }

        let manifest = Manifest::from_artifacts(&artifacts);
        let manifest_path = options.out_dir.join(MANIFEST_FILE);
        self.manifest_repo
            .save(&manifest, &manifest_path)
            .map_err(|e| WidgetpackError::Manifest {
                path: manifest_path.clone(),
                message: e.to_string(),
            })?;

        event_sink.on_event(BuildEvent::ManifestWritten {
            path: manifest_path.clone(),
            entries: manifest.len(),
        });
        event_sink.on_event(BuildEvent::Completed {
            widget_count: artifacts.len(),
        });

        Ok(BuildResult {
            artifacts,
            manifest,
            manifest_path,
        })
    }

    /// compile → hash → rename → HTML for one entry
    fn build_widget(&self, entry: &EntryPoint, options: &BuildOptions) -> WidgetpackResult<Artifact> {
        let raw = self.compiler.compile(entry, &options.out_dir)?;
        let artifact = self.namer.finalize(raw, options.hash_length)?;

        let html = generate_html(&artifact, &options.base_url);

        let live = options
            .out_dir
            .join(plain_file_name(artifact.name(), HTML_EXT));
        self.fs.write_atomic(&live, html.as_bytes())?;

        let hashed: Option<PathBuf> = match artifact.js_hash() {
            Some(hash) if options.hashed_html => {
                let path = options
                    .out_dir
                    .join(hashed_file_name(artifact.name(), hash, HTML_EXT));
                self.fs.write_atomic(&path, html.as_bytes())?;
                Some(path)
            }
            _ => None,
        };

        Ok(artifact.with_html(live, hashed))
    }
}

/// Whether `outer` is `inner` or one of its ancestors
///
/// Existing paths are canonicalized so `.`, `..` and symlinks compare
/// equal; a missing `outer` cannot contain an existing source tree.
fn contains_path(outer: &Path, inner: &Path) -> bool {
    let (Some(outer), Some(inner)) = (absolute(outer), absolute(inner)) else {
        return false;
    };
    inner.starts_with(outer)
}

fn absolute(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path)
        .or_else(|_| std::env::current_dir().map(|cwd| cwd.join(path)))
        .ok()
}
