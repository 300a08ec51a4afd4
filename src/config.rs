//! Configuration for games, search, and player styles
//!
//! Every field has a default matching the classic 8x8 setup, so an empty
//! TOML document is a valid configuration:
//!
//! ```toml
//! [game]
//! dimension = 8
//! run_to_win = 5
//! captures_to_win = 5
//!
//! [search]
//! depth = 4
//! breadth = 30
//! seed = 42
//!
//! [players]
//! one = "human"
//! two = "minimax"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_DIMENSION;
use crate::error::{ConfigError, StyleParseError};

/// Rules of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub dimension: u8,
    /// Pips in a row needed to win
    pub run_to_win: usize,
    /// Captures needed to win
    pub captures_to_win: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            run_to_win: 5,
            captures_to_win: 5,
        }
    }
}

/// Minimax search limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched before falling back to the heuristic
    pub depth: u32,
    /// Base cap on candidate moves per node (0 = all available)
    pub breadth: usize,
    /// Seed for reproducible games; entropy is used when absent
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            breadth: 30,
            seed: None,
        }
    }
}

/// How a player picks moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStyle {
    #[default]
    Random,
    Human,
    Minimax,
}

impl FromStr for PlayerStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "random" => Ok(PlayerStyle::Random),
            "1" | "human" | "player" => Ok(PlayerStyle::Human),
            "2" | "minimax" | "ai" => Ok(PlayerStyle::Minimax),
            other => Err(StyleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerStyle::Random => "random",
            PlayerStyle::Human => "human",
            PlayerStyle::Minimax => "minimax",
        };
        f.write_str(name)
    }
}

/// Style of each seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerStyle,
    pub two: PlayerStyle,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one: PlayerStyle::Random,
            two: PlayerStyle::Minimax,
        }
    }
}

impl PlayersConfig {
    /// Style of the player at `index` (0 or 1)
    pub fn style(&self, index: usize) -> PlayerStyle {
        if index == 0 {
            self.one
        } else {
            self.two
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub search: SearchConfig,
    pub players: PlayersConfig,
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.dimension == 0 {
            return Err(ConfigError::Invalid("dimension must be at least 1".into()));
        }
        if self.game.run_to_win == 0 {
            return Err(ConfigError::Invalid("run_to_win must be at least 1".into()));
        }
        if self.game.captures_to_win == 0 {
            return Err(ConfigError::Invalid(
                "captures_to_win must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
