//! Properties every started game must satisfy between turns.
//!
//! Checked after each accepted move in debug builds.

use crate::board::Board;
use crate::game::Game;
use crate::types::Marker;

/// A logical property that must hold for a given state.
pub(crate) trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants checked together.
pub(crate) trait InvariantSet<S> {
    /// Returns the descriptions of every invariant that does not hold.
    fn violations(state: &S) -> Vec<&'static str>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn violations(state: &S) -> Vec<&'static str> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(I1::description());
        }
        if !I2::holds(state) {
            violations.push(I2::description());
        }
        violations
    }
}

/// X moves first, so X never trails O and never leads by more than one.
pub(crate) struct MarkerBalance;

impl Invariant<Game> for MarkerBalance {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let x = board.count(Marker::X);
        let o = board.count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Replaying the history with alternating markers rebuilds the board exactly.
pub(crate) struct HistoryMatchesBoard;

impl Invariant<Game> for HistoryMatchesBoard {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Board::new();
        let mut marker = Marker::X;
        for pos in game.history() {
            if rebuilt.place_marker(pos.index(), marker) != Ok(true) {
                return false;
            }
            marker = marker.opponent();
        }
        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays onto the current board"
    }
}

/// Invariants checked after every accepted move.
pub(crate) type GameInvariants = (MarkerBalance, HistoryMatchesBoard);

/// Panics in debug builds if any invariant fails.
pub(crate) fn debug_assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::violations(game).is_empty(),
        "Invariant violation: {}",
        GameInvariants::violations(game).join("; ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_after(moves: &[usize]) -> Game {
        let mut game = Game::new();
        game.start("A", "B");
        for &index in moves {
            game.play_turn(index).unwrap();
        }
        game
    }

    #[test]
    fn test_fresh_game_holds() {
        let game = game_after(&[]);
        assert!(GameInvariants::violations(&game).is_empty());
    }

    #[test]
    fn test_played_game_holds() {
        let game = game_after(&[4, 0, 8, 2]);
        assert!(MarkerBalance::holds(&game));
        assert!(HistoryMatchesBoard::holds(&game));
    }

    #[test]
    fn test_rejected_moves_do_not_break_history() {
        let game = game_after(&[4, 4, 4, 0]);
        assert_eq!(game.history().len(), 2);
        assert!(HistoryMatchesBoard::holds(&game));
    }
}
