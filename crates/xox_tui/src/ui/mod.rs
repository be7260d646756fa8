//! UI rendering.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use xox_core::{Game, Mark, Outcome};

/// Renders the whole frame from a game snapshot.
pub fn draw(f: &mut Frame, game: &Game, status_message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("XOX")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let turn = Paragraph::new(turn_line(game))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(turn, chunks[1]);

    let status = Paragraph::new(status_message.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    if game.mode().is_none() {
        render_mode_select(f, chunks[3]);
    } else {
        board::render_board(f, chunks[3], game);
    }

    let help = Paragraph::new(help_line(game))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

fn turn_line(game: &Game) -> String {
    match game.outcome() {
        Outcome::Won { mark, .. } => format!("Winner: {}", mark),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::Open => match game.mode() {
            None => "Welcome".to_string(),
            Some(_) if game.bot_pending() => "Bot's turn".to_string(),
            Some(_) => match game.to_move() {
                Mark::X => "Next player: X".to_string(),
                Mark::O => "Next player: O".to_string(),
            },
        },
    }
}

fn help_line(game: &Game) -> &'static str {
    if game.mode().is_none() {
        "1/2: pick mode | q: quit"
    } else {
        "1-9: place mark | r: restart | o/t: one/two players | q: quit"
    }
}

fn render_mode_select(f: &mut Frame, area: Rect) {
    let panel = center_rect(area, 40, 6);
    let block = Block::default().borders(Borders::ALL).title("Game mode");
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let lines = Paragraph::new("Please pick a game mode:\n\n1 - Single player (vs bot)\n2 - Two players")
        .alignment(Alignment::Center);
    f.render_widget(lines, inner);
}

pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
