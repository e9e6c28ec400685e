use alloc::vec;

use crate::*;

/// Read access to a board's geometry and player-visible state.
pub(crate) trait BoardView {
    fn size(&self) -> Coord2;

    fn visibility(&self, coords: Coord2) -> Visibility;

    /// Adjacent mine count of a safe cell, `None` for mines.
    fn clue(&self, coords: Coord2) -> Option<u8>;
}

/// A board whose hidden cells can be opened by the propagator.
pub(crate) trait RevealTarget: BoardView {
    fn mark_revealed(&mut self, coords: Coord2);
}

impl BoardView for Grid {
    fn size(&self) -> Coord2 {
        Grid::size(self)
    }

    fn visibility(&self, coords: Coord2) -> Visibility {
        self[coords].visibility()
    }

    fn clue(&self, coords: Coord2) -> Option<u8> {
        self[coords].clue()
    }
}

impl RevealTarget for Grid {
    fn mark_revealed(&mut self, coords: Coord2) {
        self.set_visibility(coords, Visibility::Revealed);
    }
}

/// Reveals `coords` and, when it is a safe cell with no adjacent mines, the
/// whole connected zero region around it together with its numbered border.
///
/// Out-of-bounds, revealed and flagged cells are left untouched, so calling
/// this repeatedly is harmless.
pub fn flood_fill(grid: &mut Grid, coords: Coord2) {
    let opened = expand(grid, coords);
    if opened > 0 {
        log::trace!("Flood fill from {:?} opened {} cells", coords, opened);
    }
}

/// Propagates a reveal from `start` and returns how many cells were opened.
pub(crate) fn expand<T: RevealTarget + ?Sized>(target: &mut T, start: Coord2) -> CellCount {
    let size = target.size();
    let mut opened: CellCount = 0;
    let mut to_visit = vec![start];

    while let Some(coords) = to_visit.pop() {
        if !in_bounds(coords, size) || !target.visibility(coords).is_hidden() {
            continue;
        }

        target.mark_revealed(coords);
        opened += 1;

        if target.clue(coords) == Some(0) {
            to_visit.extend(
                NeighborIter::new(coords, size).filter(|&pos| target.visibility(pos).is_hidden()),
            );
        }
    }

    opened
}
