use super::*;

/// Places mines at fixed coordinates, ignoring the cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetMinePlacer {
    mines: Vec<Coord2>,
}

impl PresetMinePlacer {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MinePlacer for PresetMinePlacer {
    fn place(&mut self, grid: &mut Grid, _cursor: Coord2, mines: CellCount) -> CellCount {
        if self.mines.len() as CellCount != mines {
            log::warn!(
                "Preset has {} mines, field expects {}",
                self.mines.len(),
                mines
            );
        }

        let mut placed = 0;
        for &coords in &self.mines {
            match grid.get_mut(coords) {
                Some(tile) if !tile.is_mine() => {
                    tile.plant_mine();
                    placed += 1;
                }
                Some(_) => {}
                None => log::warn!("Ignoring preset mine outside the board at {:?}", coords),
            }
        }
        placed
    }
}
