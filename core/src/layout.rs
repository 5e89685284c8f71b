use alloc::vec::Vec;
use core::str::FromStr;
use ndarray::Array2;

use crate::*;

/// Board shipped with the game, `x` marks a mine.
const REFERENCE_BOARD: &str = "
    ooooxxoooo
    xooooxooxo
    oooooooooo
    xooooooooo
    oooooooooo
    ooooooxxoo
    ooooxooooo
    ooooooooxo
";

impl MineLayout {
    /// The fixed 8x10 layout the game is played on when no other board is given.
    pub fn reference() -> Self {
        match REFERENCE_BOARD.parse() {
            Ok(layout) => layout,
            Err(err) => unreachable!("reference board is malformed: {}", err),
        }
    }
}

/// Parses a text pattern with one board row per non-blank line.
///
/// `x`, `X` and `*` mark a mine, `o`, `O` and `.` a safe tile. Leading and trailing whitespace on each line is
/// ignored, so patterns can be indented inside string literals.
impl FromStr for MineLayout {
    type Err = GameError;

    fn from_str(pattern: &str) -> Result<Self> {
        let mut width = None;
        let mut tiles = Vec::new();
        let mut height = 0;

        for line in pattern.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = height;
            let mut row_width = 0;
            for (col, ch) in line.chars().enumerate() {
                let has_mine = match ch {
                    'x' | 'X' | '*' => true,
                    'o' | 'O' | '.' => false,
                    found => return Err(GameError::InvalidLayoutChar { row, col, found }),
                };
                tiles.push(has_mine);
                row_width += 1;
            }

            let expected = *width.get_or_insert(row_width);
            if row_width != expected {
                return Err(GameError::RaggedLayout {
                    row,
                    expected,
                    found: row_width,
                });
            }
            height += 1;
        }

        let width = width.ok_or(GameError::EmptyBoard)?;
        let mine_mask =
            Array2::from_shape_vec((height, width), tiles).map_err(|_| GameError::EmptyBoard)?;
        Self::from_mine_mask(mine_mask)
    }
}
