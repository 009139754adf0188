//! widgetpack CLI
//!
//! Usage: widgetpack <COMMAND>
//!
//! Commands:
//!   build    Compile, hash and write every widget's assets
//!   verify   Cross-check the output directory
//!   resolve  Print the HTML shell to serve for a widget

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "error",
                "message": format!("{:#}", err),
            }));
        } else {
            eprint!("{}", ui::error::format_error(&err));
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project = commands::project::load(cli.project.as_deref(), cli.json)?;

    match cli.command {
        Commands::Build {
            source_dir,
            out_dir,
            base_url,
            no_hash,
            hash_length,
            bundler,
        } => commands::build::cmd_build(
            project,
            commands::build::BuildOverrides {
                source_dir,
                out_dir,
                base_url,
                no_hash,
                hash_length,
                bundler: bundler.map(Into::into),
            },
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Verify { out_dir, widgets } => {
            commands::verify::cmd_verify(project, out_dir, widgets, cli.json, cli.verbose, cli.color)
        }
        Commands::Resolve {
            name,
            out_dir,
            print,
        } => commands::resolve::cmd_resolve(project, &name, out_dir, print, cli.json),
    }
}
