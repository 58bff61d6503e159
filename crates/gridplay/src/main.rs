//! Gridplay - tic-tac-toe and Connect Four in the terminal.
//!
//! Hover a cell to preview a move, click to play it.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.game, cli.log_file);

    init_logging(&config)?;
    info!(?config, "Configuration resolved");

    tui::run(&config)
}

/// Sends logs to the configured file so they never tear the TUI.
fn init_logging(config: &Config) -> Result<()> {
    let log_file = File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
