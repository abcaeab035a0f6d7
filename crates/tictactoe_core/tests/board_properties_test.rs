//! Property tests for board and game invariants.

use proptest::prelude::*;
use tictactoe_core::{Board, CELL_COUNT, Cell, Game, Marker, Outcome};

fn arb_marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..CELL_COUNT, 0..20)
}

proptest! {
    /// A second placement on the same cell is refused and changes nothing.
    #[test]
    fn prop_second_placement_refused(
        index in 0..CELL_COUNT,
        first in arb_marker(),
        second in arb_marker(),
    ) {
        let mut board = Board::new();
        prop_assert_eq!(board.place_marker(index, first), Ok(true));
        let after_first = board.clone();

        prop_assert_eq!(board.place_marker(index, second), Ok(false));
        prop_assert_eq!(board, after_first);
    }

    /// Reset always empties the board.
    #[test]
    fn prop_reset_empties(marks in prop::collection::vec((0..CELL_COUNT, arb_marker()), 0..12)) {
        let mut board = Board::new();
        for (index, marker) in marks {
            board.place_marker(index, marker).expect("Index in range");
        }
        board.reset();
        prop_assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    /// Once a game ends, nothing else changes it.
    #[test]
    fn prop_finished_game_is_frozen(moves in arb_moves(), extra in arb_moves()) {
        let mut game = Game::new();
        game.start("A", "B");
        for index in moves {
            game.play_turn(index).expect("Index in range");
        }
        if !game.is_game_over() {
            return Ok(());
        }

        let frozen = game.clone();
        for index in extra {
            prop_assert_eq!(game.play_turn(index), Ok(Outcome::Rejected));
        }
        prop_assert_eq!(game, frozen);
    }

    /// Marker counts never drift: X leads O by zero or one.
    #[test]
    fn prop_marker_balance(moves in arb_moves()) {
        let mut game = Game::new();
        game.start("A", "B");
        for index in moves {
            game.play_turn(index).expect("Index in range");
            let x = game.board().count(Marker::X);
            let o = game.board().count(Marker::O);
            prop_assert!(x == o || x == o + 1, "x={} o={}", x, o);
        }
    }
}
