use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Mines beyond which the opening neighborhood can no longer be kept clear.
const OPENING_AREA: CellCount = 9;

/// Uniformly random placement that keeps the first opened tile safe.
///
/// While more than nine tiles are still free of mines the cursor's whole 3x3 neighborhood is excluded, so the
/// opening press lands on a zero. Past that point only the cursor tile itself stays excluded.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandomMinePlacer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(&mut self, grid: &mut Grid, cursor: Coord2, mines: CellCount) -> CellCount {
        let total_tiles = grid.total_tiles();
        let mut placed: CellCount = 0;
        let mut exclude_around = true;
        let mut candidates = eligible_tiles(grid, cursor, exclude_around);

        while placed < mines {
            if exclude_around && total_tiles - placed <= OPENING_AREA {
                exclude_around = false;
                candidates = eligible_tiles(grid, cursor, exclude_around);
                log::trace!("Opening area exhausted, only keeping {:?} clear", cursor);
            }
            if candidates.is_empty() {
                log::warn!(
                    "No free tile left for mine {} of {}, stopping early",
                    placed + 1,
                    mines
                );
                break;
            }

            let pick = self.rng.random_range(0..candidates.len());
            let coords = candidates.swap_remove(pick);
            if let Some(tile) = grid.get_mut(coords) {
                tile.plant_mine();
                placed += 1;
            }
        }

        placed
    }
}

fn eligible_tiles(grid: &Grid, cursor: Coord2, exclude_around: bool) -> Vec<Coord2> {
    grid.positions()
        .filter(|&pos| pos != cursor)
        .filter(|&pos| !(exclude_around && is_around(pos, cursor)))
        .filter(|&pos| grid.get(pos).is_some_and(|tile| !tile.is_mine()))
        .collect()
}
