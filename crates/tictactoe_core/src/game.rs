//! Turn sequencing and outcome detection.

use crate::board::Board;
use crate::error::GameError;
use crate::invariants::{GameInvariants, InvariantSet, debug_assert_invariants};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::status::StatusMessage;
use crate::types::{Marker, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of attempting a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The move was not applied: the cell is occupied or the game is over.
    Rejected,
    /// The move completed a triple. The current player is the winner.
    Win,
    /// The move filled the board without completing a triple.
    Tie,
    /// The move was applied and the turn passed to the other player.
    Continue,
}

impl Outcome {
    /// Checks if this outcome ended the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Win | Outcome::Tie)
    }
}

/// Lifecycle phase of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// `start` has not been called yet.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A win or tie ended the game; only `start` leaves this phase.
    Over,
}

/// A single game of tic-tac-toe between two named players.
///
/// The game owns its board and players outright. Create one with
/// [`Game::new`], begin (or restart) with [`Game::start`], then feed cell
/// indices to [`Game::play_turn`].
///
/// Deserialized games are checked for consistency before use; a snapshot
/// that could not arise from play is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    board: Board,
    players: Option<[Player; 2]>,
    current_player_index: usize,
    game_over: bool,
    history: Vec<Position>,
}

impl Game {
    /// Creates a game that has not been started.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game, discarding any game in progress.
    ///
    /// `name1` plays X and moves first; `name2` plays O. Names are taken as
    /// given, including empty strings.
    #[instrument(skip_all, fields(name1 = %name1.as_ref(), name2 = %name2.as_ref()))]
    pub fn start(&mut self, name1: impl AsRef<str>, name2: impl AsRef<str>) {
        self.players = Some([
            Player::new(name1.as_ref().to_string(), Marker::X),
            Player::new(name2.as_ref().to_string(), Marker::O),
        ]);
        self.current_player_index = 0;
        self.game_over = false;
        self.history.clear();
        self.board.reset();
        info!("Game started");
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        match (&self.players, self.game_over) {
            (None, _) => GamePhase::NotStarted,
            (Some(_), false) => GamePhase::InProgress,
            (Some(_), true) => GamePhase::Over,
        }
    }

    /// Returns the player whose turn it is.
    ///
    /// After a win this is the winner, since the turn does not pass on a
    /// winning move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotStarted`] before the first [`Game::start`].
    pub fn current_player(&self) -> Result<&Player, GameError> {
        self.players
            .as_ref()
            .map(|players| &players[self.current_player_index])
            .ok_or(GameError::NotStarted)
    }

    /// Returns both players, X first, once the game has started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Attempts to place the current player's marker at `index`.
    ///
    /// Occupied cells and moves after the game has ended yield
    /// [`Outcome::Rejected`] and leave the game untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotStarted`] before the first [`Game::start`]
    /// - [`GameError::InvalidIndex`] if `index` is not in `0..9`
    #[instrument(skip(self), fields(player = ?self.current_marker()))]
    pub fn play_turn(&mut self, index: usize) -> Result<Outcome, GameError> {
        let marker = self.current_player()?.marker();
        let position = Position::from_index(index).ok_or(GameError::InvalidIndex { index })?;

        if self.game_over {
            debug!("Move after game over rejected");
            return Ok(Outcome::Rejected);
        }

        if !self.board.place_marker(index, marker)? {
            debug!("Move on occupied cell rejected");
            return Ok(Outcome::Rejected);
        }
        self.history.push(position);
        debug_assert_invariants(self);

        let outcome = if rules::check_win(&self.board) {
            self.game_over = true;
            Outcome::Win
        } else if rules::check_tie(&self.board) {
            self.game_over = true;
            Outcome::Tie
        } else {
            self.current_player_index = 1 - self.current_player_index;
            Outcome::Continue
        };

        if outcome.is_terminal() {
            info!(?outcome, moves = self.history.len(), "Game over");
        } else {
            debug!(?outcome, "Turn played");
        }
        Ok(outcome)
    }

    /// Checks if a win or tie has ended the game.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions played since the last start, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the triple that ended the game, if it ended in a win.
    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.game_over {
            rules::winning_line(&self.board)
        } else {
            None
        }
    }

    /// Returns the winner, if the game ended in a win.
    pub fn winner(&self) -> Option<&Player> {
        self.winning_line()?;
        self.current_player().ok()
    }

    /// Returns the status line a front end should show, or `None` before start.
    pub fn status(&self) -> Option<StatusMessage> {
        let current = self.current_player().ok()?;
        let message = match (self.phase(), self.winner()) {
            (GamePhase::Over, Some(winner)) => StatusMessage::Won(winner.name().clone()),
            (GamePhase::Over, None) => StatusMessage::Tie,
            _ => StatusMessage::Turn(current.name().clone()),
        };
        Some(message)
    }

    fn current_marker(&self) -> Option<Marker> {
        self.current_player().ok().map(Player::marker)
    }
}

/// Unchecked wire form of a [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    players: Option<[Player; 2]>,
    current_player_index: usize,
    game_over: bool,
    history: Vec<Position>,
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: &'static str| Err(GameError::InvalidSnapshot { reason });
        let game = Game {
            board: record.board,
            players: record.players,
            current_player_index: record.current_player_index,
            game_over: record.game_over,
            history: record.history,
        };

        let markers = game
            .players
            .as_ref()
            .map(|players| [players[0].marker(), players[1].marker()]);
        match markers {
            None if game == Game::default() => return Ok(game),
            None => return invalid("an unstarted game must be empty"),
            Some([Marker::X, Marker::O]) => {}
            Some(_) => return invalid("players must hold X and O in that order"),
        }
        if game.current_player_index > 1 {
            return invalid("current player index must be 0 or 1");
        }
        if !GameInvariants::violations(&game).is_empty() {
            return invalid("board does not match move history");
        }

        let ended = rules::check_win(&game.board) || rules::check_tie(&game.board);
        if game.game_over != ended {
            return invalid("game-over flag disagrees with board");
        }

        // The turn passes after every move except the one that ends the game.
        let moves = game.history.len();
        let expected = if ended { (moves + 1) % 2 } else { moves % 2 };
        if game.current_player_index != expected {
            return invalid("current player does not match move count");
        }

        Ok(game)
    }
}
