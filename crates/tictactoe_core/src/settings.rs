//! Front-end settings: the names used when a player leaves theirs blank.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by front ends.
///
/// Every field has a default, so an empty TOML document is valid.
///
/// ```toml
/// player1_default = "Crosses"
/// player2_default = "Noughts"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Name used for X when none is given.
    #[serde(default = "default_player1")]
    player1_default: String,

    /// Name used for O when none is given.
    #[serde(default = "default_player2")]
    player2_default: String,
}

fn default_player1() -> String {
    "Player 1".to_string()
}

fn default_player2() -> String {
    "Player 2".to_string()
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player1_default: default_player1(),
            player2_default: default_player2(),
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml_str(&content)?;
        info!(
            player1 = %settings.player1_default,
            player2 = %settings.player2_default,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Substitutes the default names for blank (empty or whitespace) input.
    ///
    /// Non-blank names are returned trimmed.
    pub fn resolve_names(&self, name1: &str, name2: &str) -> (String, String) {
        (
            pick(name1, &self.player1_default),
            pick(name2, &self.player2_default),
        )
    }
}

fn pick(given: &str, fallback: &str) -> String {
    match given.trim() {
        "" => fallback.to_string(),
        name => name.to_string(),
    }
}

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
