//! XOX game logic - board rules, move history, and bot scheduling.
//!
//! # Architecture
//!
//! - **Types**: board, marks, and squares ([`Board`], [`Mark`], [`Square`])
//! - **Rules**: pure outcome evaluation over a board ([`evaluate`], [`Outcome`])
//! - **Game**: history-backed controller with mode selection and move
//!   validation ([`Game`])
//! - **Session**: async wrapper that schedules the delayed bot move and
//!   notifies a rendering collaborator through an event channel
//!   ([`GameSession`], [`GameEvent`])
//!
//! # Example
//!
//! ```
//! use xox_core::{Game, GameMode, Outcome, Position};
//!
//! let mut game = Game::new();
//! game.select_mode(GameMode::TwoPlayer);
//! game.apply_move(Position::Center)?;
//! assert_eq!(game.outcome(), Outcome::Open);
//! # Ok::<(), xox_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bot;
mod game;
mod mode;
mod position;
mod rng;
mod rules;
mod session;
mod types;

// Crate-level exports - domain types
pub use types::{Board, Mark, Square};

// Crate-level exports - board coordinates
pub use position::Position;

// Crate-level exports - rules
pub use rules::{Outcome, evaluate, is_draw, is_full, winning_line};

// Crate-level exports - controller
pub use game::{Game, MoveError};
pub use mode::GameMode;

// Crate-level exports - bot
pub use bot::choose_move;
pub use rng::SessionRng;

// Crate-level exports - async session
pub use session::{DEFAULT_BOT_DELAY, GameEvent, GameSession};
