use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Uninitialized -> Playing (first activation lays the mines)
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Uninitialized (reset, or activation after the game ended)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// Mines not placed yet
    #[default]
    Uninitialized,
    Playing,
    Won,
    Lost,
}

impl FieldState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Input accepted by the field. Cursor movement goes through [`Field::move_cursor`] instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Reset,
    ToggleFlag,
    /// Press on the tile under the cursor.
    Activate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    NoChange,
    Changed,
}

impl EventOutcome {
    /// Whether a front end needs to redraw
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Used to merge outcomes when one event touches several tiles
impl BitOr for EventOutcome {
    type Output = EventOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::NoChange, Self::NoChange) => Self::NoChange,
            _ => Self::Changed,
        }
    }
}

/// The whole board: grid, cursor, counters and lifecycle state.
#[derive(Debug)]
pub struct Field {
    state: FieldState,
    pub(crate) grid: Grid,
    cursor: Cursor,
    mine_count: CellCount,
    remaining_safe: CellCount,
    flood_fill: bool,
    placer: Box<dyn MinePlacer>,
}

impl Field {
    /// Builds a field with uniformly random mine placement.
    pub fn new(config: FieldConfig) -> Result<Self> {
        Self::with_placer(config, RandomMinePlacer::new(config.seed))
    }

    pub fn with_placer(config: FieldConfig, placer: impl MinePlacer + 'static) -> Result<Self> {
        config.validate()?;

        let size = config.size();
        let mine_count = config.mine_count();
        log::debug!(
            "New {}x{} field with {} mines, flood fill: {}",
            size.0,
            size.1,
            mine_count,
            config.flood_fill
        );

        Ok(Self {
            state: FieldState::Uninitialized,
            grid: Grid::new(size),
            cursor: Cursor::new(size),
            mine_count,
            remaining_safe: config.total_tiles() - mine_count,
            flood_fill: config.flood_fill,
            placer: Box::new(placer),
        })
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn columns(&self) -> Coord {
        self.grid.size().0
    }

    pub fn rows(&self) -> Coord {
        self.grid.size().1
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.grid.get(coords)
    }

    pub fn positions(&self) -> Positions {
        self.grid.positions()
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor.position()
    }

    pub fn move_cursor(&mut self, delta: Delta) {
        self.cursor.move_by(delta);
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn remaining_safe_tiles(&self) -> CellCount {
        self.remaining_safe
    }

    pub fn flood_fill_enabled(&self) -> bool {
        self.flood_fill
    }

    pub fn flag_count(&self) -> CellCount {
        self.grid.tiles().filter(|tile| tile.is_flagged()).count() as CellCount
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flag_count())
    }

    pub fn push_event(&mut self, event: FieldEvent) -> EventOutcome {
        use FieldEvent::*;
        use FieldState::*;

        match (event, self.state) {
            (Reset, _) | (Activate, Won | Lost) => {
                self.reset();
                EventOutcome::Changed
            }
            (ToggleFlag, Playing) => self.toggle_flag(),
            (Activate, Uninitialized) => {
                self.lay_mines();
                self.state = Playing;
                self.activate() | EventOutcome::Changed
            }
            (Activate, Playing) => self.activate(),
            (ToggleFlag, _) => {
                log::trace!("Ignoring {:?} while {:?}", event, self.state);
                EventOutcome::NoChange
            }
        }
    }

    fn reset(&mut self) {
        self.grid.clear();
        self.remaining_safe = self.grid.total_tiles() - self.mine_count;
        self.state = FieldState::Uninitialized;
        log::debug!("Field reset");
    }

    fn lay_mines(&mut self) {
        let cursor = self.cursor.position();
        let placed = self.placer.place(&mut self.grid, cursor, self.mine_count);
        if placed != self.mine_count {
            log::warn!(
                "Mine count mismatch, placed: {}, requested: {}",
                placed,
                self.mine_count
            );
        }
        self.grid.compute_adjacency();
        self.remaining_safe = self.grid.total_tiles() - placed;
        log::debug!("Placed {} mines around start {:?}", placed, cursor);
    }

    fn toggle_flag(&mut self) -> EventOutcome {
        let Some(tile) = self.grid.get_mut(self.cursor.position()) else {
            return EventOutcome::NoChange;
        };
        let before = tile.state();
        tile.push_event(TileEvent::Flag);
        if tile.state() == before {
            EventOutcome::NoChange
        } else {
            EventOutcome::Changed
        }
    }

    fn activate(&mut self) -> EventOutcome {
        let cursor = self.cursor.position();
        if self.flood_fill {
            return self.flood_open(cursor);
        }

        match self.grid.get_mut(cursor) {
            Some(tile) => {
                let outcome = tile.push_event(TileEvent::Open);
                self.record(outcome)
            }
            None => EventOutcome::NoChange,
        }
    }

    /// Reacts to the outcome of opening a tile. This is the only place counters and end states change.
    pub(crate) fn record(&mut self, outcome: TileOutcome) -> EventOutcome {
        if !self.state.is_playing() {
            return EventOutcome::NoChange;
        }

        match outcome {
            TileOutcome::Noop => EventOutcome::NoChange,
            TileOutcome::Clean => {
                self.remaining_safe = self.remaining_safe.saturating_sub(1);
                if self.remaining_safe == 0 {
                    self.reveal(false);
                    self.state = FieldState::Won;
                    log::debug!("Game won");
                }
                EventOutcome::Changed
            }
            TileOutcome::Mine => {
                self.reveal(true);
                self.state = FieldState::Lost;
                log::debug!("Game lost at {:?}", self.cursor.position());
                EventOutcome::Changed
            }
        }
    }

    /// Opens every mine, or every tile when `only_mines` is false.
    fn reveal(&mut self, only_mines: bool) {
        for tile in self.grid.tiles_mut() {
            if only_mines && !tile.is_mine() {
                continue;
            }
            tile.reveal();
        }
    }
}
