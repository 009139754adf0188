//! Console Event Sink
//!
//! Human-readable build progress, one line per widget.

use std::io::{self, Write};

use widgetpack::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::build::{render_widget_built, render_widget_failed};

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn print(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            BuildEvent::Discovered { names } => {
                self.print(&format!("\nBuilding {} widget(s)\n", names.len()));
            }
            BuildEvent::WidgetStarted { name, .. } if self.ui.verbose > 1 => {
                self.print(&format!(
                    "  {} {}\n",
                    Icon::Progress.colored(color, unicode),
                    name
                ));
            }
            BuildEvent::WidgetBuilt {
                name, js, css, html, ..
            } => {
                self.print(&render_widget_built(
                    &name,
                    &js,
                    css.as_deref(),
                    &html,
                    self.ui.verbose,
                    color,
                    unicode,
                ));
            }
            BuildEvent::WidgetFailed { name, error, .. } => {
                self.print(&render_widget_failed(&name, &error, color, unicode));
            }
            BuildEvent::ManifestWritten { path, entries } if self.ui.verbose > 0 => {
                self.print(&format!(
                    "  {} {} ({} entries)\n",
                    Icon::Arrow.colored(color, unicode),
                    path.display(),
                    entries
                ));
            }
            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 1
    }
}
