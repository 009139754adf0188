use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use widgetpack::application::{BuildOptions, BuildUseCase};
use widgetpack::config::{BundlerKind, Config};
use widgetpack::domain::ports::{BuildEventSink, WidgetBundler};
use widgetpack::infrastructure::{bundler_for, JsonEventSink, JsonManifestRepository};

use crate::cli::ColorWhen;
use crate::commands::project::Project;
use crate::ui::console_sink::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::build::{render_build_header, render_build_summary};

/// Build flags; each one overrides config and environment
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
    pub source_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub no_hash: bool,
    pub hash_length: Option<usize>,
    pub bundler: Option<BundlerKind>,
}

impl BuildOverrides {
    fn apply(self, project: &Project, mut config: Config) -> Config {
        if let Some(dir) = self.source_dir {
            config.build.source_dir = project.cli_path(dir);
        }
        if let Some(dir) = self.out_dir {
            config.build.out_dir = project.cli_path(dir);
        }
        if let Some(url) = self.base_url {
            config.build.base_url = Some(url);
        }
        if self.no_hash {
            config.hashing.enabled = false;
        }
        if let Some(length) = self.hash_length {
            config.hashing.enabled = true;
            config.hashing.length = length;
        }
        if let Some(kind) = self.bundler {
            config.bundler.kind = kind;
        }
        config
    }
}

pub fn cmd_build(
    project: Project,
    overrides: BuildOverrides,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = overrides.apply(&project, project.config.clone());
    let options = BuildOptions::from_config(&config)?;
    let ui = UiContext::new(json, verbose, color, &config);

    let bundler = bundler_for(&config.bundler);
    if !json {
        print!(
            "{}",
            render_build_header(&options, bundler.id(), ui.color, ui.unicode)
        );
    }

    let sink: Arc<dyn BuildEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };

    let use_case = BuildUseCase::new(bundler, JsonManifestRepository::new());
    let result = use_case.execute_with_events(&options, sink)?;

    if !json {
        print!(
            "{}",
            render_build_summary(
                result.widget_count(),
                &result.manifest_path,
                ui.color,
                ui.unicode
            )
        );
    }

    Ok(())
}
