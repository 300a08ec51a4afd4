//! Square grid with running empty-cell count

use super::{Pip, Pos};
use crate::error::MoveError;

/// Game board of side `dim`.
///
/// `empty_count` always equals the number of empty cells, so a full board
/// is detected without a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dim: u8,
    cells: Vec<Pip>,
    empty_count: usize,
}

impl Board {
    pub fn new(dim: u8) -> Self {
        let total = dim as usize * dim as usize;
        Self {
            dim,
            cells: vec![Pip::Empty; total],
            empty_count: total,
        }
    }

    #[inline]
    pub fn dim(&self) -> u8 {
        self.dim
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Check that both coordinates lie in `[0, dim)`
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.dim as i32 && y < self.dim as i32
    }

    /// Convert signed coordinates to a position if they are on the board
    #[inline]
    pub fn pos_at(&self, x: i32, y: i32) -> Option<Pos> {
        self.in_bounds(x, y).then(|| Pos::new(x as u8, y as u8))
    }

    /// Get pip at position.
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Pip {
        self.cells[pos.to_index(self.dim)]
    }

    /// Get pip at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<Pip> {
        self.pos_at(x, y).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a pip on an empty, in-bounds cell.
    ///
    /// On error nothing is mutated.
    pub fn place(&mut self, pos: Pos, pip: Pip) -> Result<(), MoveError> {
        if !self.in_bounds(pos.x as i32, pos.y as i32) {
            return Err(MoveError::OutOfBounds {
                x: pos.x as i32,
                y: pos.y as i32,
                dim: self.dim,
            });
        }
        let idx = pos.to_index(self.dim);
        if !self.cells[idx].is_empty() {
            return Err(MoveError::Occupied { x: pos.x, y: pos.y });
        }
        self.cells[idx] = pip;
        self.empty_count -= 1;
        Ok(())
    }

    /// Clear a cell unconditionally and return its position.
    ///
    /// The caller guarantees the cell was occupied; no check is made.
    #[inline]
    pub fn remove(&mut self, pos: Pos) -> Pos {
        self.cells[pos.to_index(self.dim)] = Pip::Empty;
        self.empty_count += 1;
        pos
    }

    /// Number of cells holding `pip`
    pub fn pip_count(&self, pip: Pip) -> usize {
        self.cells.iter().filter(|&&cell| cell == pip).count()
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Pip)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &pip)| (Pos::from_index(idx, dim), pip))
    }

    /// Number of occupied cells among the up-to-8 neighbours of `pos`
    pub fn occupied_neighbours(&self, pos: Pos) -> usize {
        let mut count = 0;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (x, y) = pos.offset(dx, dy, 1);
                if matches!(self.get_checked(x, y), Some(pip) if !pip.is_empty()) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_DIMENSION)
    }
}
