//! Win detection logic for XOX.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines: rows, columns, diagonals.
///
/// Order matters - [`winning_line`] reports the first complete line,
/// which fixes the tie-break for malformed multi-line boards.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a completed line on the board.
///
/// Returns the winning mark together with the line that completed it,
/// or `None` if no line matches.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Taken(mark) = sq {
                return Some((mark, [a, b, c]));
            }
        }
    }

    None
}
