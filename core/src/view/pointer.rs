use crate::*;

/// Pixel position on the drawing surface, `x` grows to the right and `y` downwards.
pub type Pixel = (i32, i32);

/// Maps between pixel positions and tiles drawn as `tile_px` sized squares.
///
/// The x axis maps to columns and the y axis to rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerMap {
    tile_px: u32,
}

impl PointerMap {
    pub fn new(tile_px: u32) -> Result<Self> {
        if tile_px == 0 {
            return Err(GameError::InvalidTileSize);
        }
        Ok(Self { tile_px })
    }

    pub fn tile_px(&self) -> u32 {
        self.tile_px
    }

    /// Tile under `pixel`, or `None` when it falls outside a board of the given bounds.
    pub fn tile_at(&self, (x, y): Pixel, bounds: Coord2) -> Option<Coord2> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let row = Coord::try_from(y / self.tile_px).ok()?;
        let col = Coord::try_from(x / self.tile_px).ok()?;

        (row < bounds.0 && col < bounds.1).then_some((row, col))
    }

    /// Top-left pixel of the tile at `coords`, as `(x, y)`.
    pub fn tile_origin(&self, (row, col): Coord2) -> (u32, u32) {
        (
            u32::from(col).saturating_mul(self.tile_px),
            u32::from(row).saturating_mul(self.tile_px),
        )
    }

    /// Drawing surface needed for a board of the given bounds, as `(width, height)` in pixels.
    pub fn canvas_size(&self, (height, width): Coord2) -> (u32, u32) {
        self.tile_origin((height, width))
    }
}
