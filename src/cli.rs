//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::HistoryOrder;

use crate::config::DEFAULT_CONFIG_PATH;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Board side length (overrides the config file)
    #[arg(short, long, global = true)]
    pub board_size: Option<usize>,

    /// History list order: asc or desc (overrides the config file)
    #[arg(long, global = true)]
    pub history_order: Option<HistoryOrder>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting history
    Replay {
        /// Cell indices (0-based, row-major) in the order they are played
        cells: Vec<usize>,
    },
}
