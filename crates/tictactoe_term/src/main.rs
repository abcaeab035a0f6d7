//! tictactoe - two players, one terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_core::GameSettings;
use tictactoe_term::{Cli, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => GameSettings::from_file(path)?,
        None => GameSettings::default(),
    };

    let mut session = Session::new(&settings, &cli.player1, &cli.player2);
    info!("Starting terminal session");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)
}
