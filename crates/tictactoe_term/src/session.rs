//! Line-oriented game session.
//!
//! Reads one command per line, drives a [`Game`], and writes the board and
//! status after every change. Works over any reader and writer so it can be
//! driven from tests as easily as from stdin.

use std::io::{BufRead, Write};

use tictactoe_core::{Game, GameSettings, Outcome, Position};
use tracing::{debug, info, instrument};

const HELP: &str = "Enter a cell number (1-9) or a position name such as 'center', \
                    'restart' for a new game, or 'quit' to leave.";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell at this board index (0-8).
    Play(usize),
    /// Start a new game with the same players.
    Restart,
    /// Print usage help.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses a line of input.
    ///
    /// Cell numbers are 1-based, matching the numbers shown on empty cells.
    /// Returns `None` for anything unrecognised.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => return Some(Command::Quit),
            "restart" | "r" | "new" => return Some(Command::Restart),
            "help" | "h" | "?" => return Some(Command::Help),
            _ => {}
        }

        if let Ok(number) = line.parse::<usize>() {
            return (1..=9).contains(&number).then(|| Command::Play(number - 1));
        }

        Position::from_label(line).map(|pos| Command::Play(pos.index()))
    }
}

/// One sitting at the terminal: the same two players, any number of games.
#[derive(Debug)]
pub struct Session {
    game: Game,
    names: (String, String),
}

impl Session {
    /// Creates a session, filling blank names from `settings`.
    #[instrument(skip(settings))]
    pub fn new(settings: &GameSettings, player1: &str, player2: &str) -> Self {
        let names = settings.resolve_names(player1, player2);
        info!(player1 = %names.0, player2 = %names.1, "Session created");
        Self {
            game: Game::new(),
            names,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> anyhow::Result<()> {
        self.restart(output)?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Some(Command::Play(index)) => self.play(index, output)?,
                Some(Command::Restart) => self.restart(output)?,
                Some(Command::Help) => writeln!(output, "{}", HELP)?,
                Some(Command::Quit) => {
                    debug!("Quit requested");
                    break;
                }
                None => {
                    debug!(input = %line, "Unrecognised input");
                    writeln!(output, "Unrecognised input '{}'. {}", line.trim(), HELP)?;
                }
            }
        }

        writeln!(output, "Goodbye!")?;
        Ok(())
    }

    fn restart<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        self.game.start(&self.names.0, &self.names.1);
        self.render(output)
    }

    fn play<W: Write>(&mut self, index: usize, output: &mut W) -> anyhow::Result<()> {
        match self.game.play_turn(index)? {
            Outcome::Rejected if self.game.is_game_over() => {
                writeln!(output, "The game is over. Type 'restart' to play again or 'quit' to leave.")?;
            }
            Outcome::Rejected => {
                debug!(index, "Occupied cell chosen");
                match self.game.board().get(index)?.marker() {
                    Some(marker) => writeln!(output, "Cell {} is already taken by {}.", index + 1, marker)?,
                    None => writeln!(output, "Cell {} is already taken.", index + 1)?,
                }
            }
            Outcome::Win | Outcome::Tie => {
                self.render(output)?;
                writeln!(output, "Type 'restart' to play again or 'quit' to leave.")?;
            }
            Outcome::Continue => self.render(output)?,
        }
        Ok(())
    }

    fn render<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        writeln!(output, "\n{}\n", self.game.board().display())?;
        if let Some(status) = self.game.status() {
            writeln!(output, "{}", status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_are_one_based() {
        assert_eq!(Command::parse("1"), Some(Command::Play(0)));
        assert_eq!(Command::parse(" 9 "), Some(Command::Play(8)));
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("10"), None);
    }

    #[test]
    fn test_parse_labels_and_words() {
        assert_eq!(Command::parse("Center"), Some(Command::Play(4)));
        assert_eq!(Command::parse("bottom right"), Some(Command::Play(8)));
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("restart"), Some(Command::Restart));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("dance"), None);
    }
}
