//! Terminal UI: board, history list and status line.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for, move_cursor};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictactoe_engine::GameController;
use tracing::{error, info, instrument};

use crate::config::GameConfig;
use crate::logging::init_file_tracing;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    init_file_tracing(config.log_file())?;
    info!(?config, "Starting terminal UI");

    let game = GameController::with_settings(*config.board_size(), *config.history_order())?;
    let mut app = App::new(game);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key)
        {
            app.handle(action);
        }
    }
    Ok(())
}
