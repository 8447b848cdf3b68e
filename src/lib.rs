//! didledger library root.
//! Exposes the ledger engine, the CLI parser, the high-level run() function
//! and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod shell;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cfg_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::New { .. } => cli::commands::new::handle(&cli.command, cfg),
        Commands::Show { .. } | Commands::Summary { .. } => {
            cli::commands::show::handle(&cli.command, cfg)
        }
        Commands::Recompute { .. } => cli::commands::recompute::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Validate { .. } => cli::commands::validate::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the standard location
    let cfg_path: PathBuf = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    // `init` must work even when the existing file is broken
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&cfg_path)?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}
