//! Draw detection logic for XOX.

use super::win::winning_line;
use crate::types::Board;

/// Checks if every square on the board is taken.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a draw: full with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Square};

    #[test]
    fn test_empty_board_is_not_a_draw() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
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
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_a_draw() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Taken(Mark::X));
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
