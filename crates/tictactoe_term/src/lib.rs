//! Terminal front end for `tictactoe_core`.
//!
//! Plays the presentation role: reads player input, calls into the core,
//! and prints the board and status it reports back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod session;

pub use cli::Cli;
pub use session::{Command, Session};
