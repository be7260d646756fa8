//! Game rules for XOX.
//!
//! This module contains pure functions for evaluating a board
//! according to XOX rules. Rules own no state - they are queried,
//! never mutated.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::winning_line;

use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty square.
    Open,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line, in index order.
        line: [Position; 3],
    },
    /// Board is full with no winning line.
    Draw,
}

impl Outcome {
    /// Returns true if the game is still accepting moves.
    pub fn is_open(&self) -> bool {
        matches!(self, Outcome::Open)
    }
}

/// Evaluates a board to an outcome.
///
/// Accepts any square combination, including positions unreachable in
/// legal play. When several lines are complete at once, the first in
/// the fixed line order is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = win::winning_line(board) {
        Outcome::Won { mark, line }
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_empty_board_is_open() {
        assert_eq!(evaluate(&Board::new()), Outcome::Open);
    }

    #[test]
    fn test_won_board() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Taken(Mark::X));
        board.set(Position::TopCenter, Square::Taken(Mark::X));
        board.set(Position::TopRight, Square::Taken(Mark::X));
        board.set(Position::MiddleLeft, Square::Taken(Mark::O));
        board.set(Position::Center, Square::Taken(Mark::O));
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                mark: Mark::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X|O|X
        // O|X|O
        // O|X|O
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Taken(mark));
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
