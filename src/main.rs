//! Tic-tac-toe timeline - unified CLI.

use anyhow::Result;
use clap::Parser;
use tictactoe_timeline::{Cli, Command, GameConfig, logging, run_replay, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?
        .with_overrides(cli.board_size, cli.history_order)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { cells } => {
            logging::init_stderr_tracing();
            run_replay(&config, &cells, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}
