//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Symbol a player's moves are recorded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// First player's marker.
    X,
    /// Second player's marker.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Returns the single-character symbol for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Occupancy of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker placed yet.
    #[default]
    Empty,
    /// Cell holds a player's marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A participant in a game.
///
/// Players are created by [`Game::start`](crate::Game::start) and never
/// change for the rest of that game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name, accepted as given (may be empty).
    name: String,
    /// Marker placed by this player's moves.
    #[getter(skip)]
    marker: Marker,
}

impl Player {
    /// Returns the marker placed by this player's moves.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}
