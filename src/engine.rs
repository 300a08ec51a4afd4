//! Main AI engine wrapping the search
//!
//! The engine searches a private copy of the caller's game, so the live
//! game is never touched. Candidate breadth follows the turn-based
//! schedule in [`breadth_for_turn`]; when the root search examines no
//! candidate a uniformly random legal move is played instead.
//!
//! # Example
//!
//! ```
//! use pente::{AIEngine, GameState, Pos};
//!
//! let mut engine = AIEngine::with_config(2, 8, Some(42));
//! let mut game = GameState::default();
//! game.place_pip(Pos::new(3, 3));
//!
//! let result = engine.choose_move_with_stats(&game);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::board::Pos;
use crate::config::SearchConfig;
use crate::game::GameState;
use crate::search::{breadth_for_turn, SearchResult, Searcher};

/// How the move in a [`MoveResult`] was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Alpha-beta search result
    AlphaBeta,
    /// Search produced no move; a random legal move was used
    RandomFallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Root value from player one's point of view
    pub score: i64,
    pub search_type: SearchType,
    /// Candidate cap used at every node
    pub breadth: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_alphabeta(result: SearchResult, breadth: usize, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            breadth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Minimax player.
pub struct AIEngine {
    searcher: Searcher<StdRng>,
    /// Plies searched per move
    depth: u32,
    /// Candidate cap once the breadth ramp is complete (0 = all)
    base_breadth: usize,
}

impl AIEngine {
    /// Engine with the default depth (4) and breadth (30), seeded from entropy
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(depth: u32, base_breadth: usize, seed: Option<u64>) -> Self {
        Self {
            searcher: Searcher::new(seed),
            depth,
            base_breadth,
        }
    }

    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_config(config.depth, config.breadth, config.seed)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    pub fn base_breadth(&self) -> usize {
        self.base_breadth
    }

    /// Pick a move for the player to move, using the turn-based breadth schedule.
    #[must_use]
    pub fn choose_move(&mut self, game: &GameState) -> Option<Pos> {
        self.choose_move_with_stats(game).best_move
    }

    /// Like [`choose_move`](Self::choose_move) with search statistics.
    pub fn choose_move_with_stats(&mut self, game: &GameState) -> MoveResult {
        let breadth = breadth_for_turn(self.base_breadth, game.current_turn());
        self.search_with(game, self.depth, breadth)
    }

    /// Search with an explicit depth and breadth, falling back to a random
    /// legal move when the search yields none.
    pub fn search_with(&mut self, game: &GameState, depth: u32, breadth: usize) -> MoveResult {
        let start = Instant::now();
        let mut work = game.clone();
        let result = self.searcher.search(&mut work, depth, breadth);
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(mov) = result.best_move {
            info!(
                player = game.current_player() + 1,
                %mov,
                score = result.score,
                breadth,
                nodes = result.nodes,
                time_ms,
                "move evaluation"
            );
            return MoveResult::from_alphabeta(result, breadth, time_ms);
        }

        let fallback = game.legal_moves().choose(self.searcher.rng_mut()).copied();
        warn!(?fallback, "search produced no move, playing at random");
        MoveResult {
            best_move: fallback,
            score: result.score,
            search_type: SearchType::RandomFallback,
            breadth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Search `depth` plies with at most `breadth` candidates per node and
/// return the chosen move, falling back to a random legal move.
pub fn choose_move(game: &GameState, depth: u32, breadth: usize, seed: Option<u64>) -> Option<Pos> {
    AIEngine::with_config(depth, breadth, seed)
        .search_with(game, depth, breadth)
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn play(game: &mut GameState, moves: &[(u8, u8)]) {
        for &(x, y) in moves {
            assert!(game.place_pip(Pos::new(x, y)));
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), 4);
        assert_eq!(engine.base_breadth(), 30);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::with_config(4, 30, Some(1));
        engine.set_depth(2);
        assert_eq!(engine.depth(), 2);
    }

    #[test]
    fn test_engine_does_not_mutate_game() {
        let mut game = GameState::default();
        play(&mut game, &[(3, 3), (4, 4)]);
        let before = game.clone();

        let mut engine = AIEngine::with_config(3, 10, Some(3));
        let mov = engine.choose_move(&game);

        assert_eq!(game, before);
        let mov = mov.unwrap();
        assert!(game.board().is_empty(mov));
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut game = GameState::default();
        play(
            &mut game,
            &[(0, 0), (0, 7), (1, 0), (2, 7), (2, 0), (4, 7), (3, 0), (6, 7)],
        );

        let mut engine = AIEngine::with_config(2, 30, Some(4));
        let result = engine.choose_move_with_stats(&game);
        assert_eq!(result.best_move, Some(Pos::new(4, 0)));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(result.breadth, 30);
    }

    #[test]
    fn test_breadth_follows_schedule() {
        let game = GameState::default();
        let mut engine = AIEngine::with_config(1, 30, Some(5));
        let result = engine.choose_move_with_stats(&game);
        assert_eq!(result.breadth, 3);
        // Root plus three children
        assert_eq!(result.nodes, 4);
    }

    #[test]
    fn test_small_base_breadth_searches_everything_early() {
        let game = GameState::default();
        let mut engine = AIEngine::with_config(1, 4, Some(5));
        let result = engine.choose_move_with_stats(&game);
        // 4 * 1 / 8 rounds down to 0, which means no cap
        assert_eq!(result.breadth, 0);
        assert_eq!(result.nodes, 65);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_zero_depth_falls_back_to_random() {
        let mut game = GameState::default();
        play(&mut game, &[(3, 3)]);

        let mut engine = AIEngine::with_config(0, 30, Some(6));
        let result = engine.choose_move_with_stats(&game);
        assert_eq!(result.search_type, SearchType::RandomFallback);
        let mov = result.best_move.unwrap();
        assert!(game.board().is_empty(mov));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let config = GameConfig {
            dimension: 2,
            ..GameConfig::default()
        };
        let mut game = GameState::new(config);
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        let mut engine = AIEngine::with_config(4, 30, Some(7));
        assert_eq!(engine.choose_move(&game), None);
    }

    #[test]
    fn test_choose_move_function() {
        let mut game = GameState::default();
        play(
            &mut game,
            &[(0, 7), (0, 0), (2, 7), (1, 0), (4, 7), (2, 0), (6, 7), (3, 0)],
        );
        assert_eq!(choose_move(&game, 2, 0, Some(8)), Some(Pos::new(4, 0)));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut game = GameState::default();
        play(&mut game, &[(3, 3), (4, 3), (3, 4)]);

        let a = AIEngine::with_config(2, 12, Some(99)).choose_move(&game);
        let b = AIEngine::with_config(2, 12, Some(99)).choose_move(&game);
        assert_eq!(a, b);
    }
}
