//! Status lines for front ends.

use serde::{Deserialize, Serialize};

/// What a front end should tell the players after each change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum StatusMessage {
    /// The named player moves next.
    #[display("{}'s turn", _0)]
    Turn(String),
    /// The named player has won.
    #[display("{} wins!", _0)]
    Won(String),
    /// The board filled with no winner.
    #[display("It's a tie!")]
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(StatusMessage::Turn("Ada".into()).to_string(), "Ada's turn");
        assert_eq!(StatusMessage::Won("Ada".into()).to_string(), "Ada wins!");
        assert_eq!(StatusMessage::Tie.to_string(), "It's a tie!");
    }
}
