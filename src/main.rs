//! Sitepack - a minimal static asset build pipeline.

mod asset;
mod cli;
mod config;
mod html;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::BuildConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = BuildConfig::load(&cli)?;
    cli::build::run_build(&config)
}
