//! distlens - asset auditor for client-side web app builds.

mod asset;
mod cli;
mod config;
mod image;
mod logger;
mod route;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = AppConfig::load(&cli)?;

    match &cli.command {
        Commands::Analyze { .. } => cli::analyze::run_analyze(&config),
        Commands::Images { .. } => cli::images::run_images(&config),
        Commands::Optimize { .. } => cli::optimize::run_optimize(&config),
        Commands::Routes { path, .. } => cli::routes::run_routes(&config, path.as_deref()),
    }
}
