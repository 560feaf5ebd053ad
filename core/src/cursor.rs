use serde::{Deserialize, Serialize};

use crate::*;

/// Position tracker bounded to the grid; moves clamp instead of wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    position: Coord2,
    bounds: Coord2,
}

impl Cursor {
    pub fn new(bounds: Coord2) -> Self {
        Self {
            position: (0, 0),
            bounds,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub fn move_by(&mut self, (dx, dy): Delta) {
        let (x, y) = self.position;
        let (max_x, max_y) = self.bounds;
        self.position = (clamp_axis(x, dx, max_x), clamp_axis(y, dy, max_y));
    }
}

fn clamp_axis(value: Coord, delta: i32, bound: Coord) -> Coord {
    let last = i64::from(bound.saturating_sub(1));
    // the clamped value is within [0, bound - 1], which always fits
    (i64::from(value) + i64::from(delta)).clamp(0, last) as Coord
}
