//! Error types for the Pente engine

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a placement can be rejected.
///
/// A rejected placement never mutates the board or the game state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate lies outside the `dim x dim` grid
    #[error("cannot place pip at ({x}, {y}): outside the {dim}x{dim} grid")]
    OutOfBounds { x: i32, y: i32, dim: u8 },

    /// Cell already holds a pip
    #[error("cannot place pip at ({x}, {y}): pip here already")]
    Occupied { x: u8, y: u8 },
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Unknown player style name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown player style `{0}` (expected random, human or minimax)")]
pub struct StyleParseError(pub String);
