//! Pente AI Engine
//!
//! A two-player capture and connection game engine:
//! - Square board (8x8 by default)
//! - 5-in-a-row to win (overlines allowed)
//! - Capture win: 5 captures
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid of cells with bounds-checked access
//! - [`rules`]: Directional scanning, captures, and line lengths
//! - [`game`]: Game state with placement, exact undo, and move enumeration
//! - [`eval`]: Player power heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine wrapping the search with a random fallback
//! - [`player`]: Move choosers for random, human, and AI players
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use pente::{AIEngine, GameState, Pos};
//!
//! let mut game = GameState::default();
//! let mut engine = AIEngine::with_config(2, 10, Some(7));
//!
//! game.place_pip(Pos::new(3, 3));
//!
//! // AI responds as player two
//! if let Some(pos) = engine.choose_move(&game) {
//!     game.place_pip(pos);
//!     println!("AI plays at {}", pos);
//! }
//! assert_eq!(game.current_turn(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pip, Pos, DEFAULT_DIMENSION};
pub use config::{Config, GameConfig, PlayerStyle, SearchConfig};
pub use engine::{choose_move, AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, MoveError};
pub use game::{GameState, MoveQuery, TurnRecord};
pub use player::MoveChooser;
