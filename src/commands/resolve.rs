use std::path::PathBuf;

use anyhow::{Context, Result};
use widgetpack::application::resolve_widget_html;

use crate::commands::project::Project;

pub fn cmd_resolve(
    project: Project,
    name: &str,
    out_dir: Option<PathBuf>,
    print: bool,
    json: bool,
) -> Result<()> {
    let out_dir = match out_dir {
        Some(dir) => project.cli_path(dir),
        None => project.config.build.out_dir.clone(),
    };

    let path = resolve_widget_html(&out_dir, name)?;

    if print {
        let html = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "resolved",
                "command": "resolve",
                "widget": name,
                "path": path.display().to_string(),
                "html": html,
            }));
        } else {
            print!("{}", html);
        }
    } else if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "resolved",
            "command": "resolve",
            "widget": name,
            "path": path.display().to_string(),
        }));
    } else {
        println!("{}", path.display());
    }

    Ok(())
}
