//! Random-move bot for single-player games.

use crate::position::Position;
use crate::rng::SessionRng;
use crate::types::Board;
use tracing::instrument;

/// Picks a move uniformly at random among the empty squares.
///
/// Returns `None` when the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let moves = Position::valid_moves(board);
    if moves.is_empty() {
        return None;
    }
    let index = rng.random_range(0..moves.len());
    Some(moves[index])
}
