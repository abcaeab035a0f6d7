//! Tic-tac-toe core - board state, turn order, and outcome detection.
//!
//! The crate holds no presentation logic. A front end drives a [`Game`],
//! renders the [`Board`] it exposes, and reacts to the [`Outcome`] of each
//! turn.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid and its mutation rules
//! - **Rules**: pure win and tie checks over a board
//! - **Game**: players, turn alternation, and the start/play/over lifecycle
//! - **Settings**: default player names for front ends that accept blank input
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Outcome};
//!
//! # fn main() -> Result<(), tictactoe_core::GameError> {
//! let mut game = Game::new();
//! game.start("Ada", "Grace");
//!
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(game.play_turn(index)?, Outcome::Continue);
//! }
//! assert_eq!(game.play_turn(2)?, Outcome::Win);
//! assert_eq!(game.current_player()?.name(), "Ada");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod invariants;
mod position;
pub mod rules;
mod settings;
mod status;
mod types;

pub use board::{Board, CELL_COUNT};
pub use error::GameError;
pub use game::{Game, GamePhase, Outcome};
pub use position::Position;
pub use rules::WinningLine;
pub use settings::{GameSettings, SettingsError};
pub use status::StatusMessage;
pub use types::{Cell, Marker, Player};
