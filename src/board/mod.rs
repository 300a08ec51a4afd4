//! Board representation for Pente

pub mod board;


// Re-exports
pub use board::Board;

/// Default board side length (8x8)
pub const DEFAULT_DIMENSION: u8 = 8;

/// Cell occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pip {
    #[default]
    Empty,
    One,
    Two,
}

impl Pip {
    /// Pip owned by the player at `index` (0 or 1)
    #[inline]
    pub fn for_player(index: usize) -> Pip {
        if index % 2 == 0 {
            Pip::One
        } else {
            Pip::Two
        }
    }

    /// Get opponent pip
    #[inline]
    pub fn opponent(self) -> Pip {
        match self {
            Pip::One => Pip::Two,
            Pip::Two => Pip::One,
            Pip::Empty => Pip::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Pip::Empty
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Row-major index on a board of side `dim`
    #[inline]
    pub fn to_index(self, dim: u8) -> usize {
        self.y as usize * dim as usize + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, dim: u8) -> Self {
        Self {
            x: (idx % dim as usize) as u8,
            y: (idx / dim as usize) as u8,
        }
    }

    /// Step `n` cells along `(dx, dy)`, returning signed coordinates
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, n: i32) -> (i32, i32) {
        (self.x as i32 + dx * n, self.y as i32 + dy * n)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
