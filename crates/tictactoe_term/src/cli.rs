//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the first player (plays X). Blank uses the configured default.
    #[arg(long, default_value = "")]
    pub player1: String,

    /// Name of the second player (plays O). Blank uses the configured default.
    #[arg(long, default_value = "")]
    pub player2: String,

    /// Path to a TOML settings file with default player names
    #[arg(long)]
    pub config: Option<PathBuf>,
}
