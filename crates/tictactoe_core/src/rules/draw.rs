//! Tie detection.

use crate::board::Board;

/// Checks if the board leaves no cell to play.
///
/// Evaluated after the win check, so a full board here means no one won.
pub fn check_tie(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_win;
    use crate::types::Marker;

    fn board_from(symbols: &str) -> Board {
        let mut board = Board::new();
        for (index, symbol) in symbols.chars().enumerate() {
            let marker = match symbol {
                'X' => Marker::X,
                'O' => Marker::O,
                _ => continue,
            };
            board.place_marker(index, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_tied() {
        assert!(!check_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_tied() {
        assert!(!check_tie(&board_from("XOX.O....")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = board_from("XOXXOOOXX");
        assert!(check_tie(&board));
        assert!(!check_win(&board));
    }

    #[test]
    fn test_full_board_can_also_hold_a_win() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(check_tie(&board));
        assert!(check_win(&board));
    }
}
