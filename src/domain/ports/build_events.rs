//! Build Event Port
//!
//! Provides an observable interface for build operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Build started (output directory already cleaned)
    Started {
        source_dir: PathBuf,
        out_dir: PathBuf,
        hashing: bool,
        bundler: String,
    },

    /// Entry points discovered, in build order
    Discovered { names: Vec<String> },

    /// Widget compile started
    WidgetStarted { index: usize, name: String },

    /// Widget fully written (assets renamed, HTML generated)
    WidgetBuilt {
        index: usize,
        name: String,
        js: PathBuf,
        css: Option<PathBuf>,
        html: PathBuf,
        hash: Option<String>,
    },

    /// Widget failed; the build aborts after this event
    WidgetFailed {
        index: usize,
        name: String,
        error: String,
    },

    /// Manifest written
    ManifestWritten { path: PathBuf, entries: usize },

    /// Build completed
    Completed { widget_count: usize },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants detailed events (e.g., per-widget)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
