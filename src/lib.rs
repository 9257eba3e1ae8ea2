//! Tic-tac-toe with move history and time travel.
//!
//! The game rules and history live in the `tictactoe_engine` crate; this
//! crate adds the ways to drive it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings file merged with command-line overrides
//! - **TUI**: interactive board, history list and status line
//! - **Replay**: headless move sequence printer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use replay::run_replay;
pub use tui::run_tui;
