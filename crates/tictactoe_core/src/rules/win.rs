//! Win detection.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed triple and the marker that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Marker occupying all three cells.
    pub marker: Marker,
    /// The three positions, in [`LINES`] order.
    pub positions: [Position; 3],
}

/// Returns the first triple whose three cells hold the same marker.
///
/// Triples are checked in [`LINES`] order; a board can only hold more than one
/// completed triple when the same move finished both, so the order only picks
/// which one is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&positions| {
        let [a, b, c] = positions;
        match board.cell(a) {
            Cell::Occupied(marker) if board.cell(b) == board.cell(a) && board.cell(c) == board.cell(a) => {
                Some(WinningLine { marker, positions })
            }
            _ => None,
        }
    })
}

/// Checks if any triple is filled by a single marker.
pub fn check_win(board: &Board) -> bool {
    winning_line(board).is_some()
}
