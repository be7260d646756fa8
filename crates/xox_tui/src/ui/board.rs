//! XOX board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use xox_core::{Game, Mark, Outcome, Position, Square};

/// Renders the board grid with the winning line highlighted.
pub fn render_board(f: &mut Frame, area: Rect, game: &Game) {
    let winning_line = match game.outcome() {
        Outcome::Won { line, .. } => Some(line),
        _ => None,
    };

    let board_area = super::center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], game, 0, winning_line);
    render_separator(f, rows[1]);
    render_row(f, rows[2], game, 3, winning_line);
    render_separator(f, rows[3]);
    render_row(f, rows[4], game, 6, winning_line);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    game: &Game,
    start: usize,
    winning_line: Option<[Position; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], game, start, winning_line);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], game, start + 1, winning_line);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], game, start + 2, winning_line);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    game: &Game,
    index: usize,
    winning_line: Option<[Position; 3]>,
) {
    let pos = Position::from_index(index).expect("index 0-8");
    let is_winning = winning_line.is_some_and(|line| line.contains(&pos));

    let (text, style) = match game.board().get(pos) {
        Square::Empty => {
            let color = if game.accepts_input() {
                Color::DarkGray
            } else {
                Color::Black
            };
            (format!("{}", index + 1), Style::default().fg(color))
        }
        Square::Taken(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Square::Taken(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_winning {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        style
    };

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}
