use std::path::PathBuf;

use anyhow::Result;
use widgetpack::application::{VerificationReport, VerifyUseCase, WidgetReport};

use crate::cli::ColorWhen;
use crate::commands::project::Project;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::views::verify::{render_verify_header, render_verify_summary, render_widget_report};

pub fn cmd_verify(
    project: Project,
    out_dir: Option<PathBuf>,
    widgets: Vec<String>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let out_dir = match out_dir {
        Some(dir) => project.cli_path(dir),
        None => project.config.build.out_dir.clone(),
    };
    let expected = if widgets.is_empty() {
        project.config.verify.widgets.clone()
    } else {
        widgets
    };
    let ui = UiContext::new(json, verbose, color, &project.config);

    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "verify",
            "out_dir": out_dir.display().to_string(),
            "widgets": expected,
        }));
    } else {
        print!(
            "{}",
            render_verify_header(&out_dir, &expected, ui.color, ui.unicode)
        );
        println!();
    }

    let report = VerifyUseCase::new().execute_with_callback(&out_dir, &expected, |widget| {
        if json {
            let _ = crate::ui::json::emit(widget_event(widget));
        } else {
            print!(
                "{}",
                render_widget_report(widget, verbose, ui.color, ui.unicode)
            );
        }
    })?;

    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "verify",
            "passed": report.passed_count(),
            "failed": report.failed_count(),
            "warnings": report.warning_count(),
            "success": report.is_success(),
        }));
    } else {
        print!("{}", render_verify_summary(&report, ui.color, ui.unicode));
    }

    if !json && ui.caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        print_annotations(&report);
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn widget_event(widget: &WidgetReport) -> serde_json::Value {
    let failures: Vec<_> = widget
        .failures
        .iter()
        .map(|f| serde_json::json!({"kind": f.kind(), "message": f.to_string()}))
        .collect();
    let warnings: Vec<_> = widget
        .warnings
        .iter()
        .map(|w| serde_json::json!({"kind": w.kind(), "message": w.to_string()}))
        .collect();

    serde_json::json!({
        "event": "widget",
        "command": "verify",
        "widget": widget.name,
        "status": if widget.passed() { "pass" } else { "fail" },
        "js": widget.js_files,
        "css": widget.css_files,
        "failures": failures,
        "warnings": warnings,
    })
}

fn print_annotations(report: &VerificationReport) {
    for widget in &report.widgets {
        let html = report.out_dir.join(format!("{}.html", widget.name));
        let html = html.display().to_string();
        for failure in &widget.failures {
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Error,
                    &failure.to_string(),
                    Some(&html),
                    Some(&widget.name)
                )
            );
        }
        for warning in &widget.warnings {
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &warning.to_string(),
                    None,
                    Some(&widget.name)
                )
            );
        }
    }
}
