//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state, so the
//! [`Game`](crate::Game) can evaluate them after every move and a front end can
//! call them directly on a snapshot.

pub mod draw;
pub mod win;

pub use draw::check_tie;
pub use win::{LINES, WinningLine, check_win, winning_line};
