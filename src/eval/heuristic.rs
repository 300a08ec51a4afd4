//! Static power heuristic used at search leaves
//!
//! A player's power is a weighted sum of pips on the board, credited
//! captures, and the length of their longest line, plus a flat bonus once
//! either win threshold is met. It does not depend on search depth.

use crate::board::Pip;
use crate::game::GameState;

use super::patterns::PowerWeight;

/// Power of the player at `index` (0 or 1).
#[must_use]
pub fn player_power(state: &GameState, index: usize) -> i64 {
    let config = state.config();
    let pips = state.board().pip_count(Pip::for_player(index)) as i64;
    let captures = state.player(index).captures;
    let line = state.max_line_length(index);

    let winning = line >= config.run_to_win || captures >= config.captures_to_win;
    let win_bonus = if winning { PowerWeight::WIN } else { 0 };

    pips * PowerWeight::PIP
        + i64::from(captures) * PowerWeight::CAPTURE
        + line as i64 * PowerWeight::LINE
        + win_bonus
}

/// Power difference from player one's point of view.
///
/// Positive values favour player one (the maximizer), negative values
/// favour player two.
#[must_use]
pub fn evaluate(state: &GameState) -> i64 {
    player_power(state, 0) - player_power(state, 1)
}
