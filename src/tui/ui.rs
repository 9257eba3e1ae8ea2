//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_engine::{GameStatus, Mark};

use super::app::{App, Focus};

const HELP: &str =
    "arrows/hjkl move  enter place/jump  1-9 place  tab focus  s sort  +/- size  r restart  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let game = app.game();
    let title = Paragraph::new(format!(
        "Tic Tac Toe - {0}x{0} board - history {1}",
        game.board_size(),
        game.history_order()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Renders the board grid, highlighting the winning line and the cursor.
fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let n = game.board_size();
    let winning = game.winning_line();
    let focused = app.focus() == Focus::Board;

    let mut lines = Vec::with_capacity(n * 2);
    for (row, cells) in game.current().cells().chunks(n).enumerate() {
        if row > 0 {
            lines.push(Line::styled(
                vec!["───"; n].join("┼"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(n * 2);
        for (col, mark) in cells.iter().enumerate() {
            let index = row * n + col;
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let mut style = mark_style(*mark);
            if winning.contains(&index) {
                style = style.bg(Color::Green).fg(Color::Black);
            }
            if focused && index == app.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", mark), style));
        }
        lines.push(Line::from(spans));
    }

    // Cells are three columns wide plus separators; the border adds two.
    let board_area = center_rect(area, (n * 4 + 1) as u16, (n * 2 + 1) as u16);
    let block = Block::default().borders(Borders::ALL).border_style(border_style(focused));
    frame.render_widget(Paragraph::new(lines).block(block), board_area);
}

/// Renders the history list; the shown step is bold while time traveling.
fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = app
        .history_entries()
        .iter()
        .map(|entry| {
            let style = if entry.selected {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.descriptor.to_string(), style))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(border_style(focused)),
        )
        .highlight_symbol("> ");
    let list = if focused {
        list.highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        list
    };

    let mut state = ListState::default().with_selected(Some(app.history_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.game().status();
    let style = match status {
        GameStatus::NextPlayerIs(_) => Style::default().fg(Color::Yellow),
        GameStatus::WinnerIs(_) | GameStatus::Draw => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
    };
    let text = match app.message() {
        Some(message) => format!("{}  |  {}", status, message),
        None => status.to_string(),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::PlayerX => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::PlayerO => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_engine::GameController;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new(GameController::new());
        for cell in [0, 4, 1, 5, 2] {
            app.handle(Action::PlaceAt(cell));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #5 (3/1)"));
    }
}
