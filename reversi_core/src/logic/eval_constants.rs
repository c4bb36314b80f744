/// A side wins outright once its total stone value reaches this.
pub const SCORE_TARGET: i64 = 1000;

/// Point value of a freshly placed stone. Doubles on every capture.
pub const INITIAL_STONE_VALUE: i64 = 2;

/// Multiplier applied to a side's total once it has crossed `SCORE_TARGET`.
pub const POINT_SCORE_FACTOR: i64 = 10;

// Corner-weighted positional table for the standard 8x8 board.
// Corners dominate, corner-adjacent squares are liabilities.
#[rustfmt::skip]
pub const TERRAIN_WEIGHTS_8X8: [i64; 64] = [
    120, -20,  20,   5,   5,  20, -20, 120,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
     20,  -5,  15,   3,   3,  15,  -5,  20,
      5,  -5,   3,   3,   3,   3,  -5,   5,
      5,  -5,   3,   3,   3,   3,  -5,   5,
     20,  -5,  15,   3,   3,  15,  -5,  20,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
    120, -20,  20,   5,   5,  20, -20, 120,
];

/// Positional weight for `index` on a board of side length `size`.
/// The table only covers the standard game size; anything else weighs 0.
#[must_use]
pub fn terrain_weight(size: usize, index: usize) -> i64 {
    if size != 8 {
        return 0;
    }
    TERRAIN_WEIGHTS_8X8.get(index).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_corners_and_neighbors() {
        assert_eq!(terrain_weight(8, 0), 120);
        assert_eq!(terrain_weight(8, 63), 120);
        assert_eq!(terrain_weight(8, 1), -20);
        assert_eq!(terrain_weight(8, 9), -40);
    }

    #[test]
    fn test_terrain_off_size_is_zero() {
        assert_eq!(terrain_weight(6, 0), 0);
        assert_eq!(terrain_weight(0, 0), 0);
        assert_eq!(terrain_weight(8, 64), 0);
    }
}
