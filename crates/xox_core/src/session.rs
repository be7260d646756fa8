//! Async game session: bot scheduling and UI event notification.
//!
//! [`GameSession`] wraps the controller for event-driven frontends.
//! Every mutation happens under a single lock, and the delayed bot
//! move is the one suspension point in the system: at most one bot
//! task is pending at a time, and it is re-armed or cancelled whenever
//! the trigger condition (mode, turn, outcome) changes.

use crate::bot;
use crate::game::{Game, MoveError};
use crate::mode::GameMode;
use crate::position::Position;
use crate::rng::SessionRng;
use crate::rules::Outcome;
use crate::types::Mark;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Delay before a scheduled bot move commits.
pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(1000);

/// Messages sent from the session to a rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Game state updated; carries the board display.
    StateChanged(String),
    /// Bot is thinking.
    BotThinking,
    /// Move was made.
    MoveMade {
        /// The mark that moved.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// The final outcome.
        outcome: Outcome,
    },
}

/// Drives a [`Game`] for an event-driven frontend.
pub struct GameSession {
    game: Arc<Mutex<Game>>,
    rng: Arc<Mutex<SessionRng>>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    bot_delay: Duration,
    bot_task: Option<JoinHandle<()>>,
}

impl GameSession {
    /// Creates a session with the default bot delay and a random seed.
    pub fn new(event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self {
            game: Arc::new(Mutex::new(Game::new())),
            rng: Arc::new(Mutex::new(SessionRng::from_random())),
            event_tx,
            bot_delay: DEFAULT_BOT_DELAY,
            bot_task: None,
        }
    }

    /// Overrides the delay before a scheduled bot move commits.
    pub fn with_bot_delay(mut self, delay: Duration) -> Self {
        self.bot_delay = delay;
        self
    }

    /// Replaces the session RNG, e.g. with a fixed-seed generator.
    pub fn with_rng(mut self, rng: SessionRng) -> Self {
        self.rng = Arc::new(Mutex::new(rng));
        self
    }

    /// Returns a handle to the shared game for rendering.
    pub fn game(&self) -> Arc<Mutex<Game>> {
        Arc::clone(&self.game)
    }

    /// Returns a clone of the current game state.
    pub async fn snapshot(&self) -> Game {
        self.game.lock().await.clone()
    }

    /// Selects a game mode and restarts the game.
    pub async fn select_mode(&mut self, mode: GameMode) {
        info!(mode = mode.name(), "Selecting game mode");
        {
            let mut game = self.game.lock().await;
            game.select_mode(mode);
            let _ = self.event_tx.send(GameEvent::StateChanged(game.board().display()));
        }
        self.arm_bot().await;
    }

    /// Restarts the game, keeping the current mode unless one is given.
    ///
    /// A bot move pending at reset time is cancelled and never fires
    /// against the old board.
    pub async fn reset(&mut self, mode: Option<GameMode>) {
        info!("Restarting game");
        {
            let mut game = self.game.lock().await;
            game.reset(mode);
            let _ = self.event_tx.send(GameEvent::StateChanged(game.board().display()));
        }
        self.arm_bot().await;
    }

    /// Applies a human move, then re-arms the bot if it is now its turn.
    ///
    /// # Errors
    ///
    /// Propagates controller rejections; the game is unchanged on error.
    pub async fn human_move(&mut self, pos: Position) -> Result<(), MoveError> {
        {
            let mut game = self.game.lock().await;
            let mark = game.to_move();
            game.apply_move(pos)?;
            debug!(%mark, position = %pos, "Move applied");
            let _ = self.event_tx.send(GameEvent::MoveMade { mark, position: pos });
            let _ = self.event_tx.send(GameEvent::StateChanged(game.board().display()));
            let outcome = game.outcome();
            if !outcome.is_open() {
                let _ = self.event_tx.send(GameEvent::GameOver { outcome });
            }
        }
        self.arm_bot().await;
        Ok(())
    }

    /// Moves the cursor to an earlier snapshot, then re-arms the bot
    /// for whoever is to move at that point.
    ///
    /// # Errors
    ///
    /// Propagates controller rejections; the game is unchanged on error.
    pub async fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        {
            let mut game = self.game.lock().await;
            game.jump_to(index)?;
            game.set_bot_pending(false);
            let _ = self.event_tx.send(GameEvent::StateChanged(game.board().display()));
        }
        self.arm_bot().await;
        Ok(())
    }

    /// Cancels any pending bot move and schedules a new one when the
    /// trigger condition holds.
    ///
    /// The spawned task re-validates the condition under the lock
    /// after its delay, so a cancelled or superseded schedule never
    /// commits against a stale board.
    async fn arm_bot(&mut self) {
        if let Some(task) = self.bot_task.take() {
            task.abort();
        }

        let armed = {
            let mut game = self.game.lock().await;
            if game.is_bot_turn() && !game.bot_pending() {
                game.set_bot_pending(true);
                true
            } else {
                game.set_bot_pending(false);
                false
            }
        };
        if !armed {
            return;
        }

        let _ = self.event_tx.send(GameEvent::BotThinking);
        debug!(delay_ms = self.bot_delay.as_millis() as u64, "Bot move scheduled");

        let game = Arc::clone(&self.game);
        let rng = Arc::clone(&self.rng);
        let event_tx = self.event_tx.clone();
        let delay = self.bot_delay;

        self.bot_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut game = game.lock().await;
            // The trigger may have changed while we slept.
            if !game.bot_pending() || !game.is_bot_turn() {
                return;
            }

            let choice = {
                let mut rng = rng.lock().await;
                bot::choose_move(game.board(), &mut rng)
            };
            let Some(position) = choice else {
                return;
            };

            game.set_bot_pending(false);
            let mark = game.to_move();
            if game.commit_move(position).is_err() {
                return;
            }
            debug!(%mark, position = %position, "Bot move applied");

            let _ = event_tx.send(GameEvent::MoveMade { mark, position });
            let _ = event_tx.send(GameEvent::StateChanged(game.board().display()));
            let outcome = game.outcome();
            if !outcome.is_open() {
                let _ = event_tx.send(GameEvent::GameOver { outcome });
            }
        }));
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(task) = self.bot_task.take() {
            task.abort();
        }
    }
}
