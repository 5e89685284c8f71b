use alloc::string::{String, ToString};
use core::fmt;

use crate::*;

/// What a tile looks like to the player, derived purely from its visibility, mine flag and neighboring mines.
///
/// Front-ends pick their drawing asset (sprite, colored rectangle, glyph) from this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileSkin {
    Hidden,
    Flag,
    Mine,
    Empty,
    Number(u8),
}

impl TileSkin {
    pub const fn select(tile: Tile, neighboring_mines: u8) -> Self {
        use Visibility::*;
        match (tile.visibility, tile.has_mine, neighboring_mines) {
            (Hidden, _, _) => Self::Hidden,
            (Flagged, _, _) => Self::Flag,
            (Revealed, true, _) => Self::Mine,
            (Revealed, false, 0) => Self::Empty,
            (Revealed, false, count) => Self::Number(count),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Hidden => '.',
            Self::Flag => 'F',
            Self::Mine => '*',
            Self::Empty => ' ',
            Self::Number(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }
}

impl Board {
    pub fn skin(&self, coords: Coord2) -> Result<TileSkin> {
        Ok(TileSkin::select(
            self.tile(coords)?,
            self.neighboring_mines(coords)?,
        ))
    }

    /// Text grid of the board, one line per row and no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (height, width) = self.bounds();
        for row in 0..height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..width {
                let skin = self.skin((row, col)).map_err(|_| fmt::Error)?;
                write!(f, "{}", skin.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board(pattern: &str) -> Board {
        Board::new(pattern.parse().unwrap())
    }

    #[test]
    fn fresh_board_is_all_dots() {
        let board = board("xoo\nooo");

        assert_eq!(board.render(), "...\n...");
    }

    #[test]
    fn renders_every_visibility() {
        let mut board = board(
            "
            xoo
            ooo
            ooo
            ",
        );
        board.toggle_flag((0, 0)).unwrap();
        board.reveal((2, 2)).unwrap();

        assert_eq!(board.render(), "F1 \n11 \n   ");
    }

    #[test]
    fn revealed_mine_is_a_star() {
        let mut board = board("xo");
        board.reveal((0, 0)).unwrap();

        assert_eq!(board.render(), "*.");
    }

    #[test]
    fn reference_board_after_opening_a_corner() {
        let mut board = Board::new(MineLayout::reference());
        board.reveal((7, 0)).unwrap();

        let expected = [
            ".1 1......",
            ".1 13.....",
            ".2  111111",
            ".1        ",
            "11   1221 ",
            "   112..1 ",
            "   1....21",
            "   1......",
        ];
        assert_eq!(board.render(), expected.join("\n"));
    }

    #[test]
    fn skin_selection() {
        use Visibility::*;

        assert_eq!(TileSkin::select(Tile::new(true, Hidden), 3), TileSkin::Hidden);
        assert_eq!(TileSkin::select(Tile::new(false, Flagged), 0), TileSkin::Flag);
        assert_eq!(TileSkin::select(Tile::new(true, Revealed), 2), TileSkin::Mine);
        assert_eq!(TileSkin::select(Tile::new(false, Revealed), 0), TileSkin::Empty);
        assert_eq!(
            TileSkin::select(Tile::new(false, Revealed), 8),
            TileSkin::Number(8)
        );
        assert_eq!(TileSkin::Number(8).glyph(), '8');
    }
}
