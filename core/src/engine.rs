use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Minesweeper board: a fixed mine layout plus the visibility of every tile.
///
/// Every operation taking coordinates validates them first and returns [`GameError::OutOfBounds`] instead of
/// indexing outside the grid. Consumers should still check [`Board::in_bounds`] on raw input so errors only
/// signal bugs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardState", into = "BoardState")]
pub struct Board {
    mine_layout: MineLayout,
    visibility: Array2<Visibility>,
    reveal_mode: RevealMode,
}

/// Serialized form of a [`Board`], checked for matching grid shapes before use.
#[derive(Clone, Serialize, Deserialize)]
struct BoardState {
    mine_layout: MineLayout,
    visibility: Array2<Visibility>,
    reveal_mode: RevealMode,
}

impl TryFrom<BoardState> for Board {
    type Error = GameError;

    fn try_from(state: BoardState) -> Result<Self> {
        let expected = state.mine_layout.mine_mask().dim();
        let found = state.visibility.dim();
        if expected != found {
            return Err(GameError::MismatchedGrids { expected, found });
        }

        Ok(Self {
            mine_layout: state.mine_layout,
            visibility: state.visibility,
            reveal_mode: state.reveal_mode,
        })
    }
}

impl From<Board> for BoardState {
    fn from(board: Board) -> Self {
        Self {
            mine_layout: board.mine_layout,
            visibility: board.visibility,
            reveal_mode: board.reveal_mode,
        }
    }
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        Self::with_reveal_mode(mine_layout, RevealMode::default())
    }

    pub fn with_reveal_mode(mine_layout: MineLayout, reveal_mode: RevealMode) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            visibility: Array2::default(nd_index(size)),
            reveal_mode,
        }
    }

    /// Grid dimensions as `(height, width)`.
    pub fn bounds(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_coords(coords)
    }

    pub fn layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn reveal_mode(&self) -> RevealMode {
        self.reveal_mode
    }

    pub fn mine_count(&self) -> TileCount {
        self.mine_layout.mine_count()
    }

    pub fn flag_count(&self) -> TileCount {
        self.count_visibility(Visibility::Flagged)
    }

    pub fn revealed_count(&self) -> TileCount {
        self.count_visibility(Visibility::Revealed)
    }

    pub fn tile(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(Tile::new(
            self.mine_layout[coords],
            self.visibility[nd_index(coords)],
        ))
    }

    pub fn visibility(&self, coords: Coord2) -> Result<Visibility> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.visibility[nd_index(coords)])
    }

    pub fn has_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout[coords])
    }

    pub fn neighboring_mines(&self, coords: Coord2) -> Result<u8> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    /// Flags a hidden tile or unflags a flagged one. Revealed tiles cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use Visibility::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        let tile = &mut self.visibility[nd_index(coords)];

        Ok(match *tile {
            Hidden => {
                *tile = Flagged;
                Changed
            }
            Flagged => {
                *tile = Hidden;
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// Reveals the tile at `coords`.
    ///
    /// A flagged tile is left untouched, it must be unflagged first. In [`RevealMode::FloodFill`] a safe tile
    /// with no neighboring mines also reveals all its neighbors, repeating for every zero tile reached this way.
    /// Flags stop the spread just like they stop a direct reveal.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.visibility[nd_index(coords)].is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.mine_layout[coords] {
            self.reveal_tile(coords);
            log::debug!("mine revealed at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let newly_revealed = match self.reveal_mode {
            RevealMode::Single => TileCount::from(self.reveal_tile(coords)),
            RevealMode::FloodFill => self.flood_fill(coords),
        };
        log::trace!("revealed {} tiles from {:?}", newly_revealed, coords);

        Ok(if newly_revealed == 0 {
            RevealOutcome::NoChange
        } else {
            RevealOutcome::Revealed(newly_revealed)
        })
    }

    /// Forces every tile to revealed, for showing the full board once a game is over.
    ///
    /// After this the board reports [`Outcome::Lost`] whenever it has mines, so callers should keep the outcome
    /// they observed before calling it.
    pub fn reveal_all(&mut self) {
        self.visibility.fill(Visibility::Revealed);
    }

    pub fn outcome(&self) -> Outcome {
        let mut revealed: TileCount = 0;
        let mut mines: TileCount = 0;

        for (&visibility, &has_mine) in self.visibility.iter().zip(self.mine_layout.mine_mask()) {
            let tile = Tile::new(has_mine, visibility);
            if tile.is_exploded() {
                return Outcome::Lost;
            }
            revealed += TileCount::from(visibility.is_revealed());
            mines += TileCount::from(has_mine);
        }

        if revealed + mines == self.mine_layout.total_tiles() {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    /// Marks a single tile as revealed, returns whether it was not revealed before.
    fn reveal_tile(&mut self, coords: Coord2) -> bool {
        let tile = &mut self.visibility[nd_index(coords)];
        let was_unrevealed = !tile.is_revealed();
        *tile = Visibility::Revealed;
        was_unrevealed
    }

    fn flood_fill(&mut self, start: Coord2) -> TileCount {
        let mut newly_revealed = 0;
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if self.visibility[nd_index(coords)].is_flagged() {
                continue;
            }

            if self.reveal_tile(coords) {
                newly_revealed += 1;
            }

            if self.mine_layout[coords] || self.mine_layout.adjacent_mine_count(coords) > 0 {
                continue;
            }

            to_visit.extend(
                self.mine_layout
                    .iter_neighbors(coords)
                    .filter(|&pos| visited.insert(pos)),
            );
        }

        newly_revealed
    }

    fn count_visibility(&self, wanted: Visibility) -> TileCount {
        self.visibility
            .iter()
            .filter(|&&visibility| visibility == wanted)
            .count() as TileCount
    }
}
