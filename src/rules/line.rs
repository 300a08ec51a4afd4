//! Line-length detection for win checks and evaluation
//!
//! Every line of the board along each of the four axes is swept once,
//! keeping a running count of contiguous pips for one player.

use crate::board::{Board, Pip, Pos};

use super::scan::AXES;

/// Length of the longest contiguous run of `pip` along any axis.
pub fn max_line_length(board: &Board, pip: Pip) -> usize {
    AXES.iter()
        .map(|&axis| max_along_axis(board, pip, axis))
        .max()
        .unwrap_or(0)
}

/// Longest run of `pip` over every line parallel to `axis`.
///
/// A sweep stops early once the cells left in the line cannot beat the
/// best run found so far; the result is unaffected.
pub fn max_along_axis(board: &Board, pip: Pip, axis: (i32, i32)) -> usize {
    let mut best = 0;
    for (start, len) in line_starts(board.dim(), axis) {
        let mut count = 0;
        for step in 0..len {
            let (x, y) = start.offset(axis.0, axis.1, step as i32);
            if board.get(Pos::new(x as u8, y as u8)) == pip {
                count += 1;
                best = best.max(count);
            } else {
                count = 0;
                if len - step - 1 <= best {
                    break;
                }
            }
        }
    }
    best
}

/// First cell and length of every line parallel to `axis`.
fn line_starts(dim: u8, axis: (i32, i32)) -> Vec<(Pos, usize)> {
    let n = dim as usize;
    let mut starts = Vec::with_capacity(2 * n);
    match axis {
        (1, 0) => starts.extend((0..dim).map(|y| (Pos::new(0, y), n))),
        (0, 1) => starts.extend((0..dim).map(|x| (Pos::new(x, 0), n))),
        (1, 1) => {
            starts.extend((0..dim).rev().map(|y| (Pos::new(0, y), n - y as usize)));
            starts.extend((1..dim).map(|x| (Pos::new(x, 0), n - x as usize)));
        }
        (1, -1) => {
            starts.extend((0..dim).map(|y| (Pos::new(0, y), y as usize + 1)));
            starts.extend((1..dim).map(|x| (Pos::new(x, dim - 1), n - x as usize)));
        }
        _ => {}
    }
    starts
}
