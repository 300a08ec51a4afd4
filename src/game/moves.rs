//! Legal move enumeration with adjacency ordering
//!
//! Candidates are every empty cell in row-major order. Optionally they are
//! ranked or filtered by adjacency score (occupied neighbours), truncated,
//! and shuffled, in exactly that order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Pos;

use super::state::GameState;

/// Options for [`GameState::available_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveQuery {
    /// Sort by adjacency score, highest first (stable)
    pub ordered: bool,
    /// Randomly permute the list after truncation
    pub shuffled: bool,
    /// Keep only the first `max_count` moves (0 = keep all)
    pub max_count: usize,
    /// Drop moves with no occupied neighbour
    pub adjacent_only: bool,
}

impl MoveQuery {
    /// Every empty cell in row-major order
    pub fn all() -> Self {
        Self::default()
    }

    /// Candidate list used by the search: ordered, truncated to `breadth`,
    /// then shuffled
    pub fn search(breadth: usize) -> Self {
        Self {
            ordered: true,
            shuffled: true,
            max_count: breadth,
            adjacent_only: false,
        }
    }

    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    pub fn shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }

    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn adjacent_only(mut self, adjacent_only: bool) -> Self {
        self.adjacent_only = adjacent_only;
        self
    }
}

impl GameState {
    /// Empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.board()
            .iter()
            .filter(|(_, pip)| pip.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Enumerate candidate moves: filter/sort, then truncate, then shuffle.
    pub fn available_moves<R: Rng + ?Sized>(&self, query: MoveQuery, rng: &mut R) -> Vec<Pos> {
        let mut moves = self.legal_moves();

        if query.ordered || query.adjacent_only {
            let board = self.board();
            let mut scored: Vec<(Pos, usize)> = moves
                .iter()
                .map(|&pos| (pos, board.occupied_neighbours(pos)))
                .collect();
            if query.ordered {
                // sort_by is stable: ties keep row-major order
                scored.sort_by(|a, b| b.1.cmp(&a.1));
            }
            if query.adjacent_only {
                scored.retain(|&(_, score)| score > 0);
            }
            moves = scored.into_iter().map(|(pos, _)| pos).collect();
        }

        if query.max_count > 0 {
            moves.truncate(query.max_count);
        }

        if query.shuffled {
            moves.shuffle(rng);
        }

        moves
    }
}
