//! Weights for the player power heuristic

/// Scoring weights for [`player_power`](super::player_power)
pub struct PowerWeight;

impl PowerWeight {
    /// Per pip owned on the board
    pub const PIP: i64 = 1;
    /// Per credited capture
    pub const CAPTURE: i64 = 10;
    /// Per cell of the player's longest line
    pub const LINE: i64 = 5;
    /// Bonus once either win threshold is met
    pub const WIN: i64 = 1_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_hierarchy() {
        assert!(PowerWeight::WIN > PowerWeight::CAPTURE);
        assert!(PowerWeight::CAPTURE > PowerWeight::LINE);
        assert!(PowerWeight::LINE > PowerWeight::PIP);
    }

    #[test]
    fn test_win_bonus_dominates_board_material() {
        // Largest non-winning score on the default 8x8 board:
        // every cell, four captures and a four-long line
        let material = 64 * PowerWeight::PIP + 4 * PowerWeight::CAPTURE + 4 * PowerWeight::LINE;
        assert!(PowerWeight::WIN > material);
    }
}
