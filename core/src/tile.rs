use serde::{Deserialize, Serialize};

/// Player-visible state of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// Snapshot of one grid cell: its hidden mine flag and what the player sees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub has_mine: bool,
    pub visibility: Visibility,
}

impl Tile {
    pub const fn new(has_mine: bool, visibility: Visibility) -> Self {
        Self {
            has_mine,
            visibility,
        }
    }

    /// A revealed tile that carries a mine, i.e. the game is lost.
    pub const fn is_exploded(self) -> bool {
        self.has_mine && self.visibility.is_revealed()
    }
}
