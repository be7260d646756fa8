//! Application state and logic.

use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tracing::debug;
use xox_core::{Game, GameEvent, GameMode, GameSession, Outcome, Position};

/// Main application state.
pub struct App {
    session: GameSession,
    status_message: String,
}

impl App {
    /// Creates a new application with mode unset.
    pub fn new(event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self {
            session: GameSession::new(event_tx),
            status_message: "Pick a game mode to start.".to_string(),
        }
    }

    /// Returns a clone of the current game state for rendering.
    pub async fn snapshot(&self) -> Game {
        self.session.snapshot().await
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    pub async fn handle_key(&mut self, code: KeyCode) {
        let mode = self.session.snapshot().await.mode();
        match code {
            KeyCode::Char('o') => self.select_mode(GameMode::SinglePlayer).await,
            KeyCode::Char('t') => self.select_mode(GameMode::TwoPlayer).await,
            KeyCode::Char('r') if mode.is_some() => {
                self.session.reset(None).await;
                self.status_message = "New game. Press 1-9 to place a mark.".to_string();
            }
            KeyCode::Char('1') if mode.is_none() => {
                self.select_mode(GameMode::SinglePlayer).await;
            }
            KeyCode::Char('2') if mode.is_none() => {
                self.select_mode(GameMode::TwoPlayer).await;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.make_move(index).await;
            }
            _ => {}
        }
    }

    async fn select_mode(&mut self, mode: GameMode) {
        self.session.select_mode(mode).await;
        self.status_message = format!("{}. Press 1-9 to place a mark.", mode.name());
    }

    async fn make_move(&mut self, index: usize) {
        debug!(index, "Making move");
        let Some(pos) = Position::from_index(index) else {
            return;
        };
        if let Err(e) = self.session.human_move(pos).await {
            self.status_message = format!("Invalid move: {}. Try again.", e);
        }
    }

    /// Updates the status message from a session event.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::StateChanged(board) => {
                debug!(board = %board, "State changed");
            }
            GameEvent::BotThinking => {
                self.status_message = "Bot is thinking...".to_string();
            }
            GameEvent::MoveMade { mark, position } => {
                self.status_message = format!("{} played {}.", mark, position);
            }
            GameEvent::GameOver { outcome } => {
                self.status_message = match outcome {
                    Outcome::Won { mark, .. } => {
                        format!("Player {} wins! Press 'r' to play again.", mark)
                    }
                    Outcome::Draw => "It's a draw! Press 'r' to play again.".to_string(),
                    Outcome::Open => return,
                };
            }
        }
    }
}
