//! Minimax search with alpha-beta pruning
//!
//! The searcher explores the tree in place: every candidate is placed on
//! the shared [`GameState`], searched, and undone before the next sibling
//! is tried. Player one always maximizes and player two minimizes; leaf
//! values come from [`evaluate`] scaled by the remaining depth so that
//! wins found sooner (and losses found later) weigh more.
//!
//! # Example
//!
//! ```
//! use pente::game::GameState;
//! use pente::search::Searcher;
//!
//! let mut searcher = Searcher::seeded(42);
//! let mut state = GameState::default();
//!
//! let result = searcher.search(&mut state, 2, 4);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::Pos;
use crate::eval::evaluate;
use crate::game::{GameState, MoveQuery};

/// Turns over which the candidate cap ramps up to its full value
const BREADTH_RAMP_TURNS: usize = 8;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when no candidate was examined
    pub best_move: Option<Pos>,
    /// Minimax value of the root from player one's point of view
    pub score: i64,
    /// Depth searched
    pub depth: u32,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Nodes where remaining siblings were skipped
    pub cutoffs: u64,
}

/// Candidate cap for the current turn.
///
/// Ramps linearly from `base / 8` on the first turn to `base` from the
/// eighth turn on, rounding down. A result of 0 means "no cap", so a base
/// below 8 searches every candidate on the opening turns.
pub fn breadth_for_turn(base: usize, current_turn: usize) -> usize {
    base * (current_turn + 1).min(BREADTH_RAMP_TURNS) / BREADTH_RAMP_TURNS
}

/// Alpha-beta searcher owning its randomness source.
///
/// The generator shuffles candidate order at every node; seed it to make
/// searches reproducible.
#[derive(Debug, Clone)]
pub struct Searcher<R = StdRng> {
    rng: R,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher<StdRng> {
    /// Searcher with a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Searcher seeded from `seed`, or from OS entropy when absent
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::with_rng(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// The generator, for callers that need randomness consistent with the search
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Search `depth` plies from the current position.
    ///
    /// `breadth` caps the candidates per node (0 = all). The state is
    /// mutated during the search and restored exactly before returning.
    pub fn search(&mut self, state: &mut GameState, depth: u32, breadth: usize) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let maximizing = state.current_player() == 0;
        let (best_move, score) =
            self.minimax(state, depth, breadth, i64::MIN, i64::MAX, maximizing, true);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// Recursive minimax with fail-hard alpha-beta cutoffs.
    ///
    /// Returns the best move (tracked for the root) and the node value.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        state: &mut GameState,
        depth: u32,
        breadth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        is_root: bool,
    ) -> (Option<Pos>, i64) {
        self.nodes += 1;

        if depth == 0 || state.is_terminal() {
            return (None, evaluate(state) * i64::from(depth.max(1)));
        }

        let moves = state.available_moves(MoveQuery::search(breadth), &mut self.rng);
        let total = moves.len();

        let mut best_move = None;
        let mut best_value = if maximizing { i64::MIN } else { i64::MAX };

        for (i, &mov) in moves.iter().enumerate() {
            if state.try_place(mov).is_err() {
                continue;
            }
            let (_, value) = self.minimax(state, depth - 1, breadth, alpha, beta, !maximizing, false);
            state.undo_turn();

            if is_root {
                debug!(index = i + 1, total, %mov, value, "root move");
            }

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mov);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mov);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }

        (best_move, best_value)
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    /// Plain minimax over every legal move, no pruning
    fn exhaustive(state: &mut GameState, depth: u32, maximizing: bool, nodes: &mut u64) -> i64 {
        *nodes += 1;
        if depth == 0 || state.is_terminal() {
            return evaluate(state) * i64::from(depth.max(1));
        }
        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        for mov in state.legal_moves() {
            assert!(state.place_pip(mov));
            let value = exhaustive(state, depth - 1, !maximizing, nodes);
            state.undo_turn();
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    fn small_config() -> GameConfig {
        GameConfig {
            dimension: 4,
            run_to_win: 3,
            captures_to_win: 2,
        }
    }

    fn play(game: &mut GameState, moves: &[(u8, u8)]) {
        for &(x, y) in moves {
            assert!(game.place_pip(Pos::new(x, y)));
        }
    }

    #[test]
    fn test_breadth_schedule() {
        assert_eq!(breadth_for_turn(30, 0), 3);
        assert_eq!(breadth_for_turn(30, 1), 7);
        assert_eq!(breadth_for_turn(30, 3), 15);
        assert_eq!(breadth_for_turn(30, 7), 30);
        assert_eq!(breadth_for_turn(30, 50), 30);
        assert_eq!(breadth_for_turn(4, 0), 0);
        assert_eq!(breadth_for_turn(4, 1), 1);
        assert_eq!(breadth_for_turn(1, 6), 0);
        assert_eq!(breadth_for_turn(1, 7), 1);
        assert_eq!(breadth_for_turn(0, 0), 0);
        assert_eq!(breadth_for_turn(0, 20), 0);
    }

    #[test]
    fn test_search_restores_state() {
        let mut state = GameState::default();
        play(&mut state, &[(3, 3), (4, 4), (3, 4)]);
        let before = state.clone();

        let mut searcher = Searcher::seeded(1);
        let result = searcher.search(&mut state, 3, 8);

        assert_eq!(state, before);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_alpha_beta_matches_exhaustive_minimax() {
        let openings: [&[(u8, u8)]; 3] = [&[], &[(1, 1)], &[(1, 1), (2, 1), (1, 2)]];
        for opening in openings {
            for depth in 1..=3 {
                let mut state = GameState::new(small_config());
                play(&mut state, opening);
                let maximizing = state.current_player() == 0;

                let mut full_nodes = 0;
                let expected = exhaustive(&mut state, depth, maximizing, &mut full_nodes);

                for seed in 0..3 {
                    let mut searcher = Searcher::seeded(seed);
                    let result = searcher.search(&mut state, depth, 0);
                    assert_eq!(
                        result.score, expected,
                        "opening {:?} depth {} seed {}",
                        opening, depth, seed
                    );
                    assert!(result.nodes <= full_nodes);
                }
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut state = GameState::new(small_config());
        play(&mut state, &[(1, 1), (2, 2)]);
        let mut full_nodes = 0;
        exhaustive(&mut state, 3, true, &mut full_nodes);

        let mut searcher = Searcher::seeded(9);
        let result = searcher.search(&mut state, 3, 0);
        assert!(result.cutoffs > 0);
        assert!(result.nodes < full_nodes);
    }

    #[test]
    fn test_takes_immediate_line_win() {
        let mut state = GameState::default();
        // Player one: four along row 0 from the edge; player two scattered
        play(
            &mut state,
            &[(0, 0), (0, 7), (1, 0), (2, 7), (2, 0), (4, 7), (3, 0), (6, 7)],
        );

        let mut searcher = Searcher::seeded(5);
        let result = searcher.search(&mut state, 2, 0);
        assert_eq!(result.best_move, Some(Pos::new(4, 0)));

        assert!(state.place_pip(Pos::new(4, 0)));
        assert!(state.game_over());
        assert!(state.is_winning(0));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let mut state = GameState::default();
        // Player two: four along row 0 from the edge; player one to move
        play(
            &mut state,
            &[(0, 7), (0, 0), (2, 7), (1, 0), (4, 7), (2, 0), (6, 7), (3, 0)],
        );
        assert_eq!(state.current_player(), 0);

        let mut searcher = Searcher::seeded(11);
        let result = searcher.search(&mut state, 2, 0);
        assert_eq!(result.best_move, Some(Pos::new(4, 0)));
    }

    #[test]
    fn test_minimizer_takes_win_for_player_two() {
        let mut state = GameState::default();
        play(
            &mut state,
            &[(0, 7), (0, 0), (2, 7), (1, 0), (4, 7), (2, 0), (6, 7), (3, 0), (7, 3)],
        );
        assert_eq!(state.current_player(), 1);

        let mut searcher = Searcher::seeded(2);
        let result = searcher.search(&mut state, 1, 0);
        assert_eq!(result.best_move, Some(Pos::new(4, 0)));
        assert!(result.score < 0);
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let config = GameConfig {
            dimension: 2,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config);
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        let mut searcher = Searcher::seeded(0);
        let result = searcher.search(&mut state, 4, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        // Depth 1 from an empty board: every reply scores 6 for the maximizer.
        // After one pip every reply by player two scores 0 for the minimizer.
        let openings: [&[(u8, u8)]; 2] = [&[], &[(3, 3)]];
        for opening in openings {
            let mut state = GameState::default();
            play(&mut state, opening);

            for seed in 0..5 {
                let order = state.available_moves(MoveQuery::search(0), &mut StdRng::seed_from_u64(seed));
                let mut searcher = Searcher::with_rng(StdRng::seed_from_u64(seed));
                let result = searcher.search(&mut state, 1, 0);

                assert_eq!(result.best_move, Some(order[0]), "opening {:?} seed {}", opening, seed);
                assert_eq!(result.nodes, order.len() as u64 + 1);
            }
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut state = GameState::default();
        play(&mut state, &[(3, 3), (4, 3)]);

        let a = Searcher::seeded(77).search(&mut state, 2, 6);
        let b = Searcher::seeded(77).search(&mut state, 2, 6);
        assert_eq!(a, b);
    }
}
