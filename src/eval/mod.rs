//! Evaluation module for Pente positions
//!
//! The evaluation considers pips on the board, captures, line length, and
//! whether a win threshold has been reached.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, player_power};
pub use patterns::PowerWeight;
