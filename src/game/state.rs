//! Game state: board, players, and the turn log that makes undo exact

use std::fmt::Write as _;

use tracing::trace;

use crate::board::{Board, Pip, Pos};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::rules::{capture_credit, find_captures, max_line_length, CapturedPip};

/// Number of seats at the table
pub const NUM_PLAYERS: usize = 2;

/// Per-player counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pub captures: u32,
}

/// Everything needed to reverse one placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Index of the player who placed (0 or 1)
    pub player: usize,
    pub pos: Pos,
    /// Pips removed by this placement, `None` when nothing was captured
    pub captured: Option<Vec<CapturedPip>>,
    /// Set by [`GameState::game_over`] when this turn ended the game with a win
    pub is_winning_turn: bool,
}

impl TurnRecord {
    /// Captures credited to the placing player for this turn
    pub fn capture_credit(&self) -> u32 {
        self.captured.as_ref().map_or(0, |pips| capture_credit(pips.len()))
    }
}

/// A game in progress.
///
/// The turn log is append-only during play: [`place_pip`](Self::place_pip)
/// pushes one record and [`undo_turn`](Self::undo_turn) pops it, restoring
/// the board, capture counts, and turn counter exactly. Search relies on
/// that pairing to explore the tree in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    players: [Player; NUM_PLAYERS],
    history: Vec<TurnRecord>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.dimension),
            players: [Player::default(); NUM_PLAYERS],
            history: Vec::with_capacity(config.dimension as usize * config.dimension as usize),
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    /// Number of turns played so far
    #[inline]
    pub fn current_turn(&self) -> usize {
        self.history.len()
    }

    /// Index of the player to move
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_turn() % NUM_PLAYERS
    }

    /// Ordered turn log; index `i` is turn `i`
    #[inline]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Most recent turn, `None` before the first move
    #[inline]
    pub fn last_action(&self) -> Option<&TurnRecord> {
        self.history.last()
    }

    /// Place the current player's pip, resolve captures, and advance the turn.
    ///
    /// On error the state is left untouched.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), MoveError> {
        let player = self.current_player();
        self.board.place(pos, Pip::for_player(player))?;

        let mut record = TurnRecord {
            player,
            pos,
            captured: None,
            is_winning_turn: false,
        };

        let captured = find_captures(&self.board, pos);
        if !captured.is_empty() {
            for cap in &captured {
                self.board.remove(cap.pos);
            }
            let credit = capture_credit(captured.len());
            self.players[player].captures += credit;
            trace!(player, %pos, pips = captured.len(), credit, "capture");
            record.captured = Some(captured);
        }

        self.history.push(record);
        Ok(())
    }

    /// Boolean form of [`try_place`](Self::try_place)
    #[inline]
    pub fn place_pip(&mut self, pos: Pos) -> bool {
        self.try_place(pos).is_ok()
    }

    /// Reverse the most recent placement. No-op before the first move.
    pub fn undo_turn(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };

        self.board.remove(record.pos);
        if let Some(captured) = &record.captured {
            for cap in captured {
                // The cell was emptied by the capture and nothing has been placed since
                let restored = self.board.place(cap.pos, cap.owner);
                debug_assert!(restored.is_ok(), "captured cell {} not empty on undo", cap.pos);
            }
            self.players[record.player].captures -= capture_credit(captured.len());
        }
    }

    /// Longest line of the player at `index`
    #[inline]
    pub fn max_line_length(&self, index: usize) -> usize {
        max_line_length(&self.board, Pip::for_player(index))
    }

    /// Whether the player at `index` meets either win threshold.
    ///
    /// Always false before the first move.
    pub fn is_winning(&self, index: usize) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.players[index].captures >= self.config.captures_to_win
            || self.max_line_length(index) >= self.config.run_to_win
    }

    /// Terminal check without side effects: a win by captures or by line,
    /// or a full board.
    pub fn is_terminal(&self) -> bool {
        self.has_winner() || self.board.empty_count() == 0
    }

    /// Terminal check that also marks the last turn as winning when the
    /// game ended by captures or by line.
    pub fn game_over(&mut self) -> bool {
        if self.has_winner() {
            if let Some(last) = self.history.last_mut() {
                last.is_winning_turn = true;
            }
            return true;
        }
        self.board.empty_count() == 0
    }

    /// Index of a player meeting a win threshold, if any
    pub fn winner(&self) -> Option<usize> {
        (0..NUM_PLAYERS).find(|&index| self.is_winning(index))
    }

    fn has_winner(&self) -> bool {
        let by_captures = self
            .players
            .iter()
            .any(|p| p.captures >= self.config.captures_to_win);
        by_captures
            || (0..NUM_PLAYERS)
                .map(|index| self.max_line_length(index))
                .max()
                .unwrap_or(0)
                >= self.config.run_to_win
    }

    /// Per-player capture summary, one line per player
    pub fn results(&self) -> String {
        let mut out = String::new();
        for (i, player) in self.players.iter().enumerate() {
            let _ = writeln!(out, "Player {} -- captures: {}", i + 1, player.captures);
        }
        out
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
