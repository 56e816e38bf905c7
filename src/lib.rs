//! nukistats library root.
//! Exposes the access-log pipeline (`core`), the CLI parser and the
//! high-level run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Filter { .. } => cli::commands::filter::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    // load the config once, from --config or the default location
    let config_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };
    let mut cfg = Config::load(&config_path)?;

    // --tz wins over the configured timezone
    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.clone();
    }

    dispatch(&cli, &cfg, &config_path)
}
