#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use render::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod layout;
mod render;
mod tile;
mod types;
mod view;

/// Immutable placement of mines on a non-empty rectangular grid.
///
/// Serialized as the bare mine mask. Deserializing goes through [`MineLayout::from_mine_mask`], so the mine
/// count is always recomputed and empty or oversized masks are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: TileCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if rows > usize::from(Coord::MAX) || cols > usize::from(Coord::MAX) {
            return Err(GameError::BoardTooLarge { rows, cols });
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as TileCount;
        if mine_count as usize == mine_mask.len() {
            log::warn!("Every tile of the {}x{} layout is a mine", rows, cols);
        }

        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut mine_mask: Array2<bool> = Array2::default(nd_index(size));
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds(coords));
            }
            mine_mask[nd_index(coords)] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains_coords(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn contains_coords(&self, (row, col): Coord2) -> bool {
        let (height, width) = self.size();
        row < height && col < width
    }

    /// Grid dimensions as `(height, width)`.
    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn safe_tile_count(&self) -> TileCount {
        self.total_tiles() - self.mine_count
    }

    pub fn total_tiles(&self) -> TileCount {
        let (height, width) = self.size();
        TileCount::from(height) * TileCount::from(width)
    }

    pub fn mine_count(&self) -> TileCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines among the in-bounds neighbors of `coords`; the tile itself is not counted.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, so this always fits
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    pub(crate) fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

impl TryFrom<Array2<bool>> for MineLayout {
    type Error = GameError;

    fn try_from(mine_mask: Array2<bool>) -> Result<Self> {
        Self::from_mine_mask(mine_mask)
    }
}

impl From<MineLayout> for Array2<bool> {
    fn from(layout: MineLayout) -> Self {
        layout.mine_mask
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[nd_index(coords)]
    }
}

/// Terminal status of a board, derived from its tiles on every query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Line shown to the player once the game ends.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::InProgress => None,
            Self::Won => Some("Congratulations! You won!!"),
            Self::Lost => Some("You lost :("),
        }
    }
}

/// How far a single reveal spreads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    /// Revealing a safe tile with no adjacent mines also reveals its neighbors, transitively.
    #[default]
    FloodFill,
    /// Only the target tile is revealed.
    Single,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Number of tiles that went from hidden to revealed.
    Revealed(TileCount),
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed(_) => true,
            HitMine => true,
        }
    }
}
