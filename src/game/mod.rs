//! Game state with placement, exact undo, and move enumeration

pub mod moves;
pub mod state;

pub use moves::MoveQuery;
pub use state::{GameState, Player, TurnRecord, NUM_PLAYERS};
