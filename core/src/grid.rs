use ndarray::Array2;

use crate::*;

/// Fixed-size rectangular storage of tiles. Only storage and bounds-checked access live here.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    tiles: Array2<Tile>,
    size: Coord2,
}

impl Grid {
    pub fn new(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(size.to_nd_index()),
            size,
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.size.0 && y < self.size.1
    }

    /// Tile at `coords`, or `None` when out of bounds.
    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Option<&mut Tile> {
        self.tiles.get_mut(coords.to_nd_index())
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> Positions {
        Positions {
            size: self.size,
            next: 0,
        }
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.tiles.iter_neighbors(coords)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    pub fn mine_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_mine()).count() as CellCount
    }

    pub(crate) fn clear(&mut self) {
        self.tiles.fill(Tile::default());
    }

    /// Fills in `adjacent_mines` for every safe tile.
    pub(crate) fn compute_adjacency(&mut self) {
        for coords in self.positions() {
            if self.tiles[coords.to_nd_index()].is_mine() {
                continue;
            }
            let count = self
                .neighbors(coords)
                .filter(|&pos| self.tiles[pos.to_nd_index()].is_mine())
                .count();
            // at most 8 neighbors
            self.tiles[coords.to_nd_index()].set_adjacent(count as u8);
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

/// Bounds come from the array shape, which is `(rows, columns)` for row-major storage.
impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let (rows, columns) = self.dim();
        let bounds = (
            Coord::try_from(columns).unwrap_or(Coord::MAX),
            Coord::try_from(rows).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(coords, bounds)
    }
}

/// Row-major position iterator, restartable by calling [`Grid::positions`] again.
#[derive(Debug, Clone)]
pub struct Positions {
    size: Coord2,
    next: CellCount,
}

impl Iterator for Positions {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (columns, rows) = self.size;
        if self.next >= mult(columns, rows) {
            return None;
        }
        let columns = CellCount::from(columns);
        let coords = (
            (self.next % columns) as Coord,
            (self.next / columns) as Coord,
        );
        self.next += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (mult(self.size.0, self.size.1) - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Positions {}
