//! Command-line interface and build driver.

mod args;
pub mod build;

pub use args::Cli;
