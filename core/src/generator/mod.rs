use core::fmt::Debug;

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Strategy used to lay mines on a freshly reset grid.
///
/// Implementations only set mine flags; adjacency is computed by the field afterwards.
pub trait MinePlacer: Debug {
    /// Places up to `mines` mines, keeping `cursor` clear when possible, and returns how many were placed.
    fn place(&mut self, grid: &mut Grid, cursor: Coord2, mines: CellCount) -> CellCount;
}

/// Whether `a` lies in the 3x3 block centered on `b`.
pub(crate) fn is_around(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}
