//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
///
/// The controller holds `Option<GameMode>`: `None` until the user
/// picks a mode, then whichever mode was selected last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human plays X against the bot.
    SinglePlayer,
    /// Two humans share the board.
    TwoPlayer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::SinglePlayer => "Single player",
            GameMode::TwoPlayer => "Two players",
        }
    }
}
