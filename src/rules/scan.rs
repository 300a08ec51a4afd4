//! Directional pattern scanning shared by capture and line detection

use crate::board::{Board, Pip, Pos};

/// The eight compass directions as `(dx, dy)`; `y` grows downward
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];

/// The four line axes, one per pair of opposite directions
pub const AXES: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal up-right
];

/// Walk from `origin` along `dir` for at most `max_len` cells.
///
/// `accept` sees each pip together with its index in the sequence; the walk
/// stops at the first rejected cell or at the board edge. Returns the
/// accepted prefix, origin included.
pub fn scan_direction<F>(
    board: &Board,
    origin: Pos,
    dir: (i32, i32),
    max_len: usize,
    mut accept: F,
) -> Vec<Pos>
where
    F: FnMut(Pip, usize) -> bool,
{
    let mut sequence = Vec::with_capacity(max_len);
    for step in 0..max_len {
        let (x, y) = origin.offset(dir.0, dir.1, step as i32);
        let Some(pos) = board.pos_at(x, y) else {
            break;
        };
        if !accept(board.get(pos), sequence.len()) {
            break;
        }
        sequence.push(pos);
    }
    sequence
}

/// Longest contiguous run of `pip` starting at `origin` and heading along `dir`.
///
/// Zero when `origin` itself does not hold `pip`.
pub fn run_length(board: &Board, origin: Pos, dir: (i32, i32), pip: Pip) -> usize {
    scan_direction(board, origin, dir, board.dim() as usize, |cell, _| cell == pip).len()
}
