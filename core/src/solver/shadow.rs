use ndarray::Array2;

use crate::*;

/// What the solver has deduced so far, one entry per grid cell.
///
/// Starts from the grid's revealed cells with every flag cleared; the real
/// grid's flags are never trusted.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SolverState {
    cells: Array2<Visibility>,
}

impl SolverState {
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        let cells = Array2::from_shape_fn(grid.size().to_nd_index(), |(row, col)| {
            if grid[(row as Coord, col as Coord)].is_revealed() {
                Visibility::Revealed
            } else {
                Visibility::Hidden
            }
        });
        Self { cells }
    }
}

/// The real grid's layout seen through a private [`SolverState`].
pub(crate) struct ShadowBoard<'a> {
    grid: &'a Grid,
    state: SolverState,
}

impl<'a> ShadowBoard<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            state: SolverState::from_grid(grid),
        }
    }

    /// Flags a hidden cell, returning whether anything changed.
    pub(crate) fn flag(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.state.cells[coords.to_nd_index()];
        if cell.is_hidden() {
            *cell = Visibility::Flagged;
            true
        } else {
            false
        }
    }

    /// Whether every safe cell has been deduced and opened.
    pub(crate) fn is_complete(&self) -> bool {
        self.grid
            .cells()
            .filter(|cell| !cell.is_mine())
            .all(|cell| self.visibility(cell.coords()) == Visibility::Revealed)
    }
}

impl BoardView for ShadowBoard<'_> {
    fn size(&self) -> Coord2 {
        self.grid.size()
    }

    fn visibility(&self, coords: Coord2) -> Visibility {
        self.state.cells[coords.to_nd_index()]
    }

    fn clue(&self, coords: Coord2) -> Option<u8> {
        self.grid[coords].clue()
    }
}

impl RevealTarget for ShadowBoard<'_> {
    fn mark_revealed(&mut self, coords: Coord2) {
        self.state.cells[coords.to_nd_index()] = Visibility::Revealed;
    }
}
