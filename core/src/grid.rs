use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Allocates a grid of `size` where every cell is hidden, safe and unflagged.
pub fn create_empty_grid(size: Coord2) -> Grid {
    Grid::new(size)
}

/// Rectangular board of cells, indexed `(row, col)`.
///
/// Dimensions are fixed at construction. Mine placement and neighbor counts are
/// only written by the generator, so a grid handed to a caller keeps its
/// layout; callers change visibility through [`flood_fill`] and
/// [`Grid::toggle_flag`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(size: Coord2) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            // both axes come from a `Coord`, so the casts are lossless
            Cell::new((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size);

        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            grid.place_mine(coords);
        }

        grid.compute_neighbor_counts();
        Ok(grid)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(Cell::is_mine)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(Cell::is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(Cell::is_flagged)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        neighbors_of(coords, self.size())
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.get(coords).is_some_and(Cell::is_mine)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, never truncates
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// Whether every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use Visibility::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match cell.visibility() {
            Hidden => {
                cell.set_visibility(Flagged);
                Changed
            }
            Flagged => {
                cell.set_visibility(Hidden);
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// Highlights the cell a hint points at. Hints on cells that are no longer
    /// hidden are dropped.
    pub fn mark_hint(&mut self, hint: Hint) -> Result<MarkOutcome> {
        let coords = self.validate_coords(hint.coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if !cell.visibility().is_hidden() || cell.hint() == Some(hint.kind) {
            return Ok(MarkOutcome::NoChange);
        }

        cell.set_hint(Some(hint.kind));
        Ok(MarkOutcome::Changed)
    }

    pub fn clear_hints(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_hint(None);
        }
    }

    pub(crate) fn place_mine(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].set_mine();
    }

    pub(crate) fn compute_neighbor_counts(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let count = if self[coords].is_mine() {
                    0
                } else {
                    self.adjacent_mine_count(coords)
                };
                self.cells[coords.to_nd_index()].set_neighbor_count(count);
            }
        }
    }

    pub(crate) fn set_visibility(&mut self, coords: Coord2, visibility: Visibility) {
        self.cells[coords.to_nd_index()].set_visibility(visibility);
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // a grid never holds more than `Coord::MAX²` cells
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn empty_grid_has_default_cells_with_coordinates() {
        let grid = create_empty_grid((2, 3));

        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid.total_cells(), 6);
        assert_eq!(grid.mine_count(), 0);
        for cell in grid.cells() {
            assert_eq!(grid[cell.coords()], *cell);
            assert!(!cell.is_mine() && !cell.is_revealed() && !cell.is_flagged());
            assert_eq!(cell.neighbor_count(), 0);
        }
    }

    #[test]
    fn cells_iterate_in_row_major_order() {
        let grid = Grid::new((2, 2));

        let order: Vec<_> = grid.cells().map(Cell::coords).collect();

        assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn from_mine_coords_computes_neighbor_counts() {
        let grid = Grid::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(grid.mine_count(), 2);
        assert_eq!(grid.safe_cell_count(), 7);
        assert_eq!(grid[(1, 1)].neighbor_count(), 2);
        assert_eq!(grid[(0, 1)].neighbor_count(), 1);
        assert_eq!(grid[(0, 2)].neighbor_count(), 0);
        assert_eq!(grid[(0, 0)].clue(), None);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds_mine() {
        assert_eq!(
            Grid::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn toggle_flag_round_trips_hidden_cell() {
        let mut grid = Grid::new((2, 2));

        assert_eq!(grid.toggle_flag((1, 0)), Ok(MarkOutcome::Changed));
        assert!(grid[(1, 0)].is_flagged());
        assert_eq!(grid.flagged_count(), 1);

        assert_eq!(grid.toggle_flag((1, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(grid[(1, 0)].visibility(), Visibility::Hidden);
    }

    #[test]
    fn toggle_flag_refuses_revealed_cell() {
        let mut grid = Grid::from_mine_coords((1, 3), &[(0, 2)]).unwrap();
        flood_fill(&mut grid, (0, 1));

        assert_eq!(grid.toggle_flag((0, 1)), Ok(MarkOutcome::NoChange));
        assert!(grid[(0, 1)].is_revealed());
        assert_eq!(grid.toggle_flag((5, 5)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn hints_mark_hidden_cells_until_cleared() {
        let mut grid = Grid::new((2, 2));
        let hint = Hint {
            coords: (0, 1),
            kind: MoveKind::Mine,
        };

        assert_eq!(grid.mark_hint(hint), Ok(MarkOutcome::Changed));
        assert_eq!(grid.mark_hint(hint), Ok(MarkOutcome::NoChange));
        assert_eq!(grid[(0, 1)].hint(), Some(MoveKind::Mine));

        grid.clear_hints();
        assert!(grid.cells().all(|cell| cell.hint().is_none()));
    }

    #[test]
    fn grid_survives_serialization_mid_game() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        flood_fill(&mut grid, (0, 0));
        grid.toggle_flag((2, 2)).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, grid);
        assert!(restored[(2, 2)].is_flagged());
    }

    #[test]
    fn is_cleared_ignores_mines() {
        let mut grid = Grid::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        assert!(!grid.is_cleared());

        flood_fill(&mut grid, (0, 1));

        assert!(grid.is_cleared());
        assert_eq!(grid.revealed_count(), 1);
    }
}
