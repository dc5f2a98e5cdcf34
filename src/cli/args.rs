//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Sitepack static asset pipeline CLI
///
/// Invoked with no arguments it runs a full build with the default
/// configuration.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitepack.toml)
    #[arg(short = 'C', long, default_value = "sitepack.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
