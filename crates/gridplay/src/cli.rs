//! Command-line interface for gridplay.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GameKind;

/// Gridplay - tic-tac-toe and Connect Four in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridplay")]
#[command(about = "Play tic-tac-toe and Connect Four with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults to ./gridplay.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Game to start with
    #[arg(short, long, value_enum)]
    pub game: Option<GameKind>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
