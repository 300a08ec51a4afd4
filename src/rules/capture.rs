//! Capture rules for Pente (pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's pip and O is
//! the opponent's pip. The pattern is anchored on the pip just placed and
//! checked independently in all eight directions.

use crate::board::{Board, Pip, Pos};

use super::scan::{scan_direction, DIRECTIONS};

/// Cells covered by one capture pattern: placed, opp, opp, own
const CAPTURE_SPAN: usize = 4;

/// A pip removed by a capture, with the owner it had before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapturedPip {
    pub owner: Pip,
    pub pos: Pos,
}

/// Find pips captured by the pip already placed at `pos`.
///
/// Each matching direction contributes its two interior cells, so the
/// result always holds `2 * k` pips for `k` matching directions. Returns an
/// empty vector when `pos` is empty.
pub fn find_captures(board: &Board, pos: Pos) -> Vec<CapturedPip> {
    let player = board.get(pos);
    let mut captured = Vec::new();
    if player.is_empty() {
        return captured;
    }

    for &dir in &DIRECTIONS {
        let sequence = scan_direction(board, pos, dir, CAPTURE_SPAN, |pip, idx| {
            matches_capture_cell(pip, player, idx)
        });
        if sequence.len() < CAPTURE_SPAN {
            continue;
        }
        for &inner in &sequence[1..CAPTURE_SPAN - 1] {
            captured.push(CapturedPip {
                owner: board.get(inner),
                pos: inner,
            });
        }
    }

    captured
}

/// Captures credited for `pips` removed pips: `pips / 2` rounded half to even.
///
/// Pips always come in pairs, so this is plain halving in practice; the
/// rounding only matters for odd counts.
#[inline]
pub fn capture_credit(pips: usize) -> u32 {
    let half = pips / 2;
    let credit = if pips % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    };
    credit as u32
}

#[inline]
fn matches_capture_cell(pip: Pip, player: Pip, idx: usize) -> bool {
    match idx {
        0 => pip == player,
        1 | 2 => pip == player.opponent(),
        _ => pip == player,
    }
}
