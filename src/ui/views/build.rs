use std::path::Path;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use widgetpack::application::BuildOptions;

pub fn render_build_header(
    options: &BuildOptions,
    bundler: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "widgetpack build");
    header.add("Source", options.source_dir.display().to_string());
    header.add("Output", options.out_dir.display().to_string());
    header.add("Bundler", bundler);
    header.add("Base URL", options.base_url.to_string());
    let hashing = match options.hash_length {
        Some(len) => format!("{} chars", len.get()),
        None => "off".to_string(),
    };
    header.add("Hashing", hashing);
    header.render(supports_color, supports_unicode)
}

pub fn render_widget_built(
    name: &str,
    js: &Path,
    css: Option<&Path>,
    html: &Path,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut details = Vec::new();
    if verbose > 0 {
        details.push(file_name(js));
        if let Some(css) = css {
            details.push(file_name(css));
        }
        details.push(file_name(html));
    }

    CheckItem {
        name: name.to_string(),
        status: CheckStatus::Pass,
        message: file_name(js),
        details,
    }
    .render(supports_color, supports_unicode)
}

pub fn render_widget_failed(
    name: &str,
    error: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CheckItem {
        name: name.to_string(),
        status: CheckStatus::Error,
        message: error.to_string(),
        details: Vec::new(),
    }
    .render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    widget_count: usize,
    manifest_path: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Build complete");
    summary.add_stat("widgets", widget_count);
    summary.with_next_step(format!(
        "Run `widgetpack verify` to check {}",
        manifest_path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    ));
    summary.render(supports_color, supports_unicode)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
