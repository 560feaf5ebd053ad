use crate::*;

impl Field {
    /// Opens `root` and spreads through every connected zero tile.
    ///
    /// Each open is reported through [`Field::record`] just like a manual press, so counters and end states stay
    /// consistent. Mines other than the root are never opened, and propagation stops at numbered tiles and at
    /// tiles whose open was a no-op (already opened or flagged). Uses an explicit stack so large boards cannot
    /// overflow the call stack.
    pub(crate) fn flood_open(&mut self, root: Coord2) -> EventOutcome {
        let mut outcome = EventOutcome::NoChange;
        let mut to_visit = vec![(root, true)];

        while let Some((coords, is_root)) = to_visit.pop() {
            if !self.state().is_playing() {
                break;
            }
            let Some(tile) = self.grid.get_mut(coords) else {
                continue;
            };
            if !is_root && tile.is_mine() {
                continue;
            }

            let opened = tile.push_event(TileEvent::Open);
            let adjacent = tile.adjacent_mines();
            outcome = outcome | self.record(opened);

            if adjacent > 0 || opened != TileOutcome::Clean {
                continue;
            }
            log::trace!("Flood spreading from {:?}", coords);
            to_visit.extend(self.grid.neighbors(coords).map(|nbr| (nbr, false)));
        }

        outcome
    }
}
