//! Search module for the Pente AI
//!
//! Contains depth-limited minimax with alpha-beta pruning and the
//! breadth schedule that widens the search as the game develops.

pub mod alphabeta;

pub use alphabeta::{breadth_for_turn, SearchResult, Searcher};
