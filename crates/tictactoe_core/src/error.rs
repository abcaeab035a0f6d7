//! Errors signalled by the game core.
//!
//! Routine rejections (occupied cell, finished game) are not errors; they come
//! back as [`Outcome::Rejected`](crate::Outcome::Rejected). These variants mark
//! integration mistakes by the caller.

use crate::board::CELL_COUNT;

/// Error raised when the caller breaks the game's call contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The index does not name a cell on the board.
    #[display("Cell index {} is out of range (must be 0-{})", index, CELL_COUNT - 1)]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },

    /// The operation needs a game created by `start`.
    #[display("Game has not been started")]
    NotStarted,

    /// A deserialized game could not have been reached by play.
    #[display("Invalid game snapshot: {}", reason)]
    InvalidSnapshot {
        /// What was inconsistent.
        reason: &'static str,
    },
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GameError::InvalidIndex { index: 12 }.to_string(),
            "Cell index 12 is out of range (must be 0-8)"
        );
        assert_eq!(GameError::NotStarted.to_string(), "Game has not been started");
        assert_eq!(
            GameError::InvalidSnapshot { reason: "bad" }.to_string(),
            "Invalid game snapshot: bad"
        );
    }
}
