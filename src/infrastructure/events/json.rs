//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                source_dir,
                out_dir,
                hashing,
                bundler,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "build",
                    "source_dir": source_dir.display().to_string(),
                    "out_dir": out_dir.display().to_string(),
                    "hashing": hashing,
                    "bundler": bundler,
                })
            }

            BuildEvent::Discovered { names } => {
                serde_json::json!({
                    "event": "discovered",
                    "command": "build",
                    "count": names.len(),
                    "widgets": names,
                })
            }

            BuildEvent::WidgetStarted { index, name } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": "build",
                    "index": index,
                    "widget": name,
                })
            }

            BuildEvent::WidgetBuilt {
                index,
                name,
                js,
                css,
                html,
                hash,
            } => {
                serde_json::json!({
                    "event": "item_built",
                    "command": "build",
                    "index": index,
                    "widget": name,
                    "js": js.display().to_string(),
                    "css": css.map(|p| p.display().to_string()),
                    "html": html.display().to_string(),
                    "hash": hash,
                })
            }

            BuildEvent::WidgetFailed { index, name, error } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "build",
                    "index": index,
                    "widget": name,
                    "error": error,
                })
            }

            BuildEvent::ManifestWritten { path, entries } => {
                serde_json::json!({
                    "event": "manifest_written",
                    "command": "build",
                    "path": path.display().to_string(),
                    "entries": entries,
                })
            }

            BuildEvent::Completed { widget_count } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "build",
                    "status": "success",
                    "widgets": widget_count,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
