//! Field engine for a terminal minesweeper: grid storage, tile and field state machines, mine placement and
//! flood fill. Front ends read the field through its accessors and feed it [`FieldEvent`]s.

use serde::{Deserialize, Serialize};

pub use cursor::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use grid::*;
pub use tile::*;
pub use types::*;

mod cursor;
mod error;
mod field;
mod flood;
mod generator;
mod grid;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub columns: Coord,
    pub rows: Coord,
    /// Share of tiles holding mines, clamped into `1..=100` when used.
    pub mine_percent: u8,
    pub flood_fill: bool,
    /// Fixed seed for mine placement, random when absent.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            columns: 15,
            rows: 15,
            mine_percent: 35,
            flood_fill: true,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub const fn new(columns: Coord, rows: Coord, mine_percent: u8, flood_fill: bool) -> Self {
        Self {
            columns,
            rows,
            mine_percent,
            flood_fill,
            seed: None,
        }
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.columns, self.rows)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.columns, self.rows)
    }

    /// Rejects boards that cannot hold at least one mine and one safe tile.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(FieldError::EmptyBoard);
        }
        if self.total_tiles() < 2 {
            return Err(FieldError::NoSafeTiles);
        }
        Ok(())
    }

    /// `total * percent / 100`, floored, then kept within `1..total`.
    pub fn mine_count(&self) -> CellCount {
        let total = u64::from(self.total_tiles());
        let percent = u64::from(self.mine_percent.clamp(1, 100));
        // never exceeds total, so it fits back into CellCount
        let mines = (total * percent / 100) as CellCount;
        mines.clamp(1, self.total_tiles().saturating_sub(1).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_count_floors_and_clamps() {
        assert_eq!(FieldConfig::new(15, 15, 35, true).mine_count(), 78);
        assert_eq!(FieldConfig::new(10, 10, 0, true).mine_count(), 1);
        assert_eq!(FieldConfig::new(3, 3, 5, true).mine_count(), 1);
        assert_eq!(FieldConfig::new(10, 10, 100, true).mine_count(), 99);
        assert_eq!(FieldConfig::new(10, 10, 250, true).mine_count(), 99);
        assert_eq!(FieldConfig::new(1, 2, 50, true).mine_count(), 1);
    }

    #[test]
    fn validate_rejects_degenerate_boards() {
        assert_eq!(
            FieldConfig::new(0, 5, 10, true).validate(),
            Err(FieldError::EmptyBoard)
        );
        assert_eq!(
            FieldConfig::new(5, 0, 10, true).validate(),
            Err(FieldError::EmptyBoard)
        );
        assert_eq!(
            FieldConfig::new(1, 1, 10, true).validate(),
            Err(FieldError::NoSafeTiles)
        );
        assert_eq!(FieldConfig::new(1, 2, 10, true).validate(), Ok(()));
    }

    #[test]
    fn seed_is_kept() {
        let config = FieldConfig::default().with_seed(42);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.size(), (15, 15));
    }
}
