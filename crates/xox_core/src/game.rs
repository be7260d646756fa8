//! History-backed game controller for XOX.
//!
//! The controller owns the sequence of board snapshots, the current
//! move pointer, the selected mode, and the bot-pending flag. Turn,
//! outcome, and interactivity are derived from those on every query
//! rather than stored.

use crate::mode::GameMode;
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Board, Mark, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors returned for rejected operations.
///
/// A rejected operation never mutates the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// No game mode has been selected yet.
    #[display("No game mode selected")]
    ModeNotSelected,
    /// The game already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,
    /// The target square is already taken.
    #[display("Square is already taken")]
    SquareTaken,
    /// Single-player mode and it is the bot's turn.
    #[display("It is not your turn")]
    NotYourTurn,
    /// A bot move is currently pending.
    #[display("Bot move is pending")]
    BotPending,
    /// History index beyond the last snapshot.
    #[display("No such move in history")]
    HistoryOutOfRange,
}

/// XOX game controller.
///
/// Snapshot 0 is always the empty board; snapshot `k` differs from
/// snapshot `k - 1` in exactly one square, which goes from empty to a
/// mark. The mark to move is X when the cursor is even, O when odd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots from game start to the latest move.
    history: Vec<Board>,
    /// Index of the current snapshot in `history`.
    cursor: usize,
    /// Selected mode, `None` until the user picks one.
    mode: Option<GameMode>,
    /// True only while a scheduled bot move waits out its delay.
    bot_pending: bool,
}

impl Game {
    /// Creates a new controller with mode unset and an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            mode: None,
            bot_pending: false,
        }
    }

    /// Selects a game mode, restarting the game.
    ///
    /// History collapses to the empty board and any pending bot move
    /// is forgotten. Always succeeds.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: GameMode) {
        self.reset(Some(mode));
    }

    /// Restarts the game, switching to `mode` when given.
    ///
    /// With `None` the current mode is kept, which stays unset if no
    /// mode was ever selected.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Option<GameMode>) {
        self.mode = mode.or(self.mode);
        self.history = vec![Board::new()];
        self.cursor = 0;
        self.bot_pending = false;
    }

    /// Returns the current board snapshot.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns all board snapshots up to the present move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current move pointer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the selected mode, if any.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Returns true while a scheduled bot move waits out its delay.
    pub fn bot_pending(&self) -> bool {
        self.bot_pending
    }

    /// Returns the mark to move: X on even cursors, O on odd.
    pub fn to_move(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Evaluates the current snapshot to an outcome.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Returns true when the board should accept human input.
    ///
    /// Two-player games accept input whenever the outcome is open;
    /// single-player games additionally require X to move with no
    /// bot move pending.
    pub fn accepts_input(&self) -> bool {
        if !self.outcome().is_open() {
            return false;
        }
        match self.mode {
            None => false,
            Some(GameMode::TwoPlayer) => true,
            Some(GameMode::SinglePlayer) => self.to_move() == Mark::X && !self.bot_pending,
        }
    }

    /// Returns true when the bot should schedule a move: single-player
    /// mode, O to move, outcome still open.
    pub fn is_bot_turn(&self) -> bool {
        self.mode == Some(GameMode::SinglePlayer)
            && self.to_move() == Mark::O
            && self.outcome().is_open()
    }

    /// Applies a human move at the given position.
    ///
    /// # Errors
    ///
    /// Rejects without mutating when no mode is selected, the game is
    /// over, the square is taken, it is the bot's turn in single-player
    /// mode, or a bot move is pending.
    #[instrument(skip(self), fields(mark = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.mode.is_none() {
            return Err(MoveError::ModeNotSelected);
        }
        if self.mode == Some(GameMode::SinglePlayer) {
            if self.bot_pending {
                return Err(MoveError::BotPending);
            }
            if self.to_move() != Mark::X && self.outcome().is_open() {
                return Err(MoveError::NotYourTurn);
            }
        }
        self.commit_move(pos)
    }

    /// Applies a move without the human-turn guards. Used by the bot
    /// task, which moves as O while `accepts_input` is false.
    ///
    /// Still validates that the game is open and the square is empty.
    pub(crate) fn commit_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if !self.outcome().is_open() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareTaken);
        }

        let mut next = self.board().clone();
        next.set(pos, Square::Taken(self.to_move()));

        // Overwrite any redo branch beyond the cursor before appending.
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        Ok(())
    }

    /// Moves the cursor to an earlier or later snapshot.
    ///
    /// The next `apply_move` from a rewound cursor discards every
    /// snapshot past it.
    ///
    /// # Errors
    ///
    /// Rejects indices beyond the last snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::HistoryOutOfRange);
        }
        self.cursor = index;
        Ok(())
    }

    pub(crate) fn set_bot_pending(&mut self, pending: bool) {
        self.bot_pending = pending;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
