//! punchsheet library root.
//! Exposes the CLI parser, the high-level run() function, the work-hours
//! core and the workbook reader/writer.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Build { .. } => cli::commands::build::handle(&cli.command, cfg),
        Commands::Check => cli::commands::check::handle(),
        Commands::Hours { .. } => cli::commands::hours::handle(&cli.command, cfg),
        Commands::Days { .. } => cli::commands::days::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
