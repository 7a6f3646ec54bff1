//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Rewrites styled-components tagged templates into Panda CSS styled() calls.
#[derive(Debug, Parser)]
#[command(name = "styled2panda")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project directory (must contain a tsconfig.json)
    pub project_dir: Utf8PathBuf,

    /// Output format for the rewrite report
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Report what would change without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Glob patterns to ignore
    #[arg(long)]
    pub ignore: Vec<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}
