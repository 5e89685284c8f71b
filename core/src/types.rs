use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-tile counts.
pub type TileCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index of a tile.
pub(crate) const fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row as usize, col as usize]
}

/// Grid dimensions as `(height, width)`, saturating if an axis does not fit in [`Coord`].
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (
        rows.try_into().unwrap_or(Coord::MAX),
        cols.try_into().unwrap_or(Coord::MAX),
    )
}

/// The up-to-8 tiles touching a center tile, orthogonally or diagonally, in row-major order.
///
/// Neighbors outside the bounds are skipped and the center itself is never yielded. A center outside the
/// bounds has no neighbors.
#[derive(Clone, Debug)]
pub struct Neighbors {
    tiles: [Coord2; 8],
    len: u8,
    next: u8,
}

impl Neighbors {
    pub fn new(center: Coord2, (height, width): Coord2) -> Self {
        let mut neighbors = Self {
            tiles: [center; 8],
            len: 0,
            next: 0,
        };

        let (row, col) = center;
        if row >= height || col >= width {
            return neighbors;
        }

        let last_row = row.saturating_add(1).min(height - 1);
        let last_col = col.saturating_add(1).min(width - 1);
        for r in row.saturating_sub(1)..=last_row {
            for c in col.saturating_sub(1)..=last_col {
                if (r, c) != center {
                    neighbors.tiles[usize::from(neighbors.len)] = (r, c);
                    neighbors.len += 1;
                }
            }
        }
        neighbors
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.len {
            return None;
        }
        let tile = self.tiles[usize::from(self.next)];
        self.next += 1;
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::from(self.len - self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        Neighbors::new(center, bounds).collect()
    }

    #[test]
    fn corner_edge_and_interior_neighbor_counts() {
        assert_eq!(Neighbors::new((0, 0), (3, 3)).len(), 3);
        assert_eq!(Neighbors::new((2, 2), (3, 3)).len(), 3);
        assert_eq!(Neighbors::new((0, 1), (3, 3)).len(), 5);
        assert_eq!(Neighbors::new((1, 0), (3, 3)).len(), 5);
        assert_eq!(Neighbors::new((1, 1), (3, 3)).len(), 8);
    }

    #[test]
    fn yields_row_major_order() {
        assert_eq!(
            neighbors((1, 1), (3, 3)),
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(neighbors((0, 3), (2, 4)), [(0, 2), (1, 2), (1, 3)]);
    }

    #[test]
    fn single_tile_board_has_no_neighbors() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn center_outside_bounds_has_no_neighbors() {
        assert!(neighbors((3, 0), (3, 3)).is_empty());
        assert!(neighbors((0, 7), (3, 3)).is_empty());
    }

    #[test]
    fn saturates_at_coord_max() {
        assert_eq!(neighbors((Coord::MAX - 1, 0), (Coord::MAX, 1)), [(Coord::MAX - 2, 0)]);
        assert_eq!(
            neighbors((Coord::MAX - 1, Coord::MAX - 1), (Coord::MAX, Coord::MAX)).len(),
            3
        );
    }
}
