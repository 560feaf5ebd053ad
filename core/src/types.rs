/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u32;

/// Two-dimensional position `(column, row)`.
pub type Coord2 = (Coord, Coord);

/// Cursor movement vector `(dx, dy)`.
pub type Delta = (i32, i32);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Tiles are stored row-major, so the array index is `[row, column]`.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Inclusive `[low, high]` span of one axis around `center`, or `None` on an empty axis.
fn window(center: Coord, bound: Coord) -> Option<(Coord, Coord)> {
    let last = bound.checked_sub(1)?;
    if center > last {
        return None;
    }
    Some((center.saturating_sub(1), center.saturating_add(1).min(last)))
}

/// Iterates the up-to-8 grid-bounded neighbors of a position, row by row.
///
/// Walks the 3x3 window around the center clipped to the board, skipping the center itself.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    columns: (Coord, Coord),
    last_row: Coord,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        match (window(center.0, bounds.0), window(center.1, bounds.1)) {
            (Some(columns), Some((first_row, last_row))) => Self {
                center,
                columns,
                last_row,
                next: Some((columns.0, first_row)),
            },
            _ => Self {
                center,
                columns: (0, 0),
                last_row: 0,
                next: None,
            },
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            let (x, y) = current;
            self.next = if x < self.columns.1 {
                Some((x + 1, y))
            } else if y < self.last_row {
                Some((self.columns.0, y + 1))
            } else {
                None
            };

            if current != self.center {
                return Some(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (5, 5)).collect();
        assert_eq!(neighbors, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_neighbors_are_row_major() {
        let neighbors: Vec<_> = NeighborIter::new((2, 2), (5, 5)).collect();
        assert_eq!(
            neighbors,
            vec![(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)]
        );
    }

    #[test]
    fn far_edge_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((3, 1), (4, 2)).collect();
        assert_eq!(neighbors, vec![(2, 0), (3, 0), (2, 1)]);
    }

    #[test]
    fn single_tile_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn out_of_bounds_center_has_no_neighbors() {
        assert_eq!(NeighborIter::new((5, 0), (3, 3)).count(), 0);
        assert_eq!(NeighborIter::new((0, 0), (0, 3)).count(), 0);
    }

    #[test]
    fn max_coordinates_do_not_overflow() {
        let neighbors: Vec<_> = NeighborIter::new((Coord::MAX - 1, 0), (Coord::MAX, 1)).collect();
        assert_eq!(neighbors, vec![(Coord::MAX - 2, 0)]);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 7).to_nd_index(), [7, 3]);
    }
}
