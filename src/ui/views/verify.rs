use std::path::Path;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use widgetpack::application::{VerificationReport, WidgetReport};

pub fn render_verify_header(
    out_dir: &Path,
    expected: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Verify, "widgetpack verify");
    header.add("Output", out_dir.display().to_string());
    header.add("Widgets", expected.join(", "));
    header.render(supports_color, supports_unicode)
}

pub fn render_widget_report(
    widget: &WidgetReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let status = if !widget.passed() {
        CheckStatus::Error
    } else if !widget.warnings.is_empty() {
        CheckStatus::Warning
    } else {
        CheckStatus::Pass
    };

    let mut details: Vec<String> = widget.failures.iter().map(|f| f.to_string()).collect();
    details.extend(widget.warnings.iter().map(|w| w.to_string()));
    if verbose > 0 {
        details.extend(widget.js_files.iter().cloned());
        details.extend(widget.css_files.iter().cloned());
    }

    CheckItem {
        name: widget.name.clone(),
        status,
        message: String::new(),
        details,
    }
    .render(supports_color, supports_unicode)
}

pub fn render_verify_summary(
    report: &VerificationReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if !report.is_success() {
        ResultSummary::failure("Verification FAILED")
    } else if report.warning_count() > 0 {
        ResultSummary::partial("Verification passed with warnings")
    } else {
        ResultSummary::success("All widgets verified")
    };

    summary.add_stat("passed", report.passed_count());
    summary.add_stat("failed", report.failed_count());
    summary.add_stat("warnings", report.warning_count());
    if !report.is_success() {
        summary.with_next_step("Run `widgetpack build` to regenerate the assets");
    }
    summary.render(supports_color, supports_unicode)
}
