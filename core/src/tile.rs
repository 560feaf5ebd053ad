use core::fmt;
use serde::{Deserialize, Serialize};

/// Player-visible state of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Closed,
    Opened,
    Flagged,
}

/// Input accepted by a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileEvent {
    Flag,
    Open,
}

/// What happened when a tile handled an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileOutcome {
    /// Event had no effect, or only toggled a flag.
    Noop,
    /// Tile was opened and is safe.
    Clean,
    /// Tile was opened and holds a mine.
    Mine,
}

pub const MINE_LABEL: char = '*';

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    state: TileState,
    is_mine: bool,
    adjacent: u8,
}

impl Tile {
    pub const fn state(&self) -> TileState {
        self.state
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    /// Number of mined neighbors. Zero until mines are placed.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent
    }

    pub const fn is_opened(&self) -> bool {
        matches!(self.state, TileState::Opened)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.state, TileState::Flagged)
    }

    /// Applies one event. Opened is terminal: nothing changes it until a reset.
    pub fn push_event(&mut self, event: TileEvent) -> TileOutcome {
        use TileEvent::*;
        use TileState::*;

        match (self.state, event) {
            (Closed, Flag) => {
                self.state = Flagged;
                TileOutcome::Noop
            }
            (Flagged, Flag) => {
                self.state = Closed;
                TileOutcome::Noop
            }
            (Closed, Open) => {
                self.state = Opened;
                if self.is_mine {
                    TileOutcome::Mine
                } else {
                    TileOutcome::Clean
                }
            }
            (Flagged, Open) | (Opened, _) => TileOutcome::Noop,
        }
    }

    /// Single-character presentation used by renderers.
    pub fn label(&self) -> char {
        match self.state {
            TileState::Closed => '.',
            TileState::Flagged => 'F',
            TileState::Opened if self.is_mine => MINE_LABEL,
            TileState::Opened => char::from(b'0' + self.adjacent),
        }
    }

    pub(crate) fn plant_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn set_adjacent(&mut self, count: u8) {
        self.adjacent = count;
    }

    /// Forces the tile open without reporting an outcome, used when the game ends.
    pub(crate) fn reveal(&mut self) {
        self.state = TileState::Opened;
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
