use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {0:?} are outside the board")]
    OutOfBounds(Coord2),
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board of {rows}x{cols} tiles is too large")]
    BoardTooLarge { rows: usize, cols: usize },
    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unexpected {found:?} at row {row}, column {col}")]
    InvalidLayoutChar { row: usize, col: usize, found: char },
    #[error("Tile size must be at least one pixel")]
    InvalidTileSize,
    #[error("Visibility grid is {found:?}, expected {expected:?} to match the mines")]
    MismatchedGrids { expected: (usize, usize), found: (usize, usize) },
}

pub type Result<T> = core::result::Result<T, GameError>;
