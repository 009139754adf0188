//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Every flag overrides the matching `widgetpack.toml` key and environment variable

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use widgetpack::config::BundlerKind;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundlerArg {
    Esbuild,
    Passthrough,
}

impl From<BundlerArg> for BundlerKind {
    fn from(arg: BundlerArg) -> Self {
        match arg {
            BundlerArg::Esbuild => BundlerKind::Esbuild,
            BundlerArg::Passthrough => BundlerKind::Passthrough,
        }
    }
}

/// widgetpack - content-addressed widget build and verification
#[derive(Parser, Debug)]
#[command(name = "widgetpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (defaults to the nearest directory with widgetpack.toml)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every widget into hashed JS/CSS/HTML assets
    Build {
        /// Directory containing widget entry modules
        #[arg(long, value_name = "DIR")]
        source_dir: Option<PathBuf>,

        /// Output directory (cleared before building)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Base URL prepended to asset references
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Keep plain `<name>.js` / `<name>.css` names
        #[arg(long)]
        no_hash: bool,

        /// Number of hex characters kept from each digest (1-64)
        #[arg(long, value_name = "N", conflicts_with = "no_hash")]
        hash_length: Option<usize>,

        /// Bundler used to compile entries
        #[arg(long, value_enum)]
        bundler: Option<BundlerArg>,
    },

    /// Check that every expected widget's assets exist and are referenced correctly
    Verify {
        /// Output directory to inspect
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Widget expected in the build (repeatable; replaces [verify] widgets)
        #[arg(long = "widget", value_name = "NAME")]
        widgets: Vec<String>,
    },

    /// Print the HTML shell path the server should load for a widget
    Resolve {
        /// Widget name
        name: String,

        /// Output directory to search
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Print the HTML content instead of its path
        #[arg(long)]
        print: bool,
    },
}
