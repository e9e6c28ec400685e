#![no_std]

//! Board generation and single-clue logical solving for mine-detection grids.
//!
//! The UI owns the [`Grid`] once it is generated and calls back into this crate
//! through [`flood_fill`] when the player opens a cell and [`find_hint`] when
//! the player asks for help.

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::flood_fill;
pub use solver::*;
pub use types::*;

pub(crate) use reveal::{BoardView, RevealTarget, expand};

mod cell;
mod error;
mod generator;
mod grid;
mod reveal;
mod solver;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new((rows, cols): Coord2, mines: CellCount) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let mines = mines.min(mult(rows, cols));
        Self::new_unchecked((rows, cols), mines)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((16, 30), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Checks that a guaranteed board can be asked for from `start`: the board
    /// is non-empty, `start` is on it and the mines fit outside its 3×3 block.
    pub fn validate_start(&self, start: Coord2) -> Result<Coord2> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        if !in_bounds(start, self.size) {
            return Err(GameError::InvalidCoords);
        }
        if self.mines.saturating_add(9) >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(start)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_size_and_mines() {
        let config = GameConfig::new((0, 4), 100);

        assert_eq!(config.size, (1, 4));
        assert_eq!(config.mines, 4);
        assert_eq!(config.total_cells(), 4);
    }

    #[test]
    fn presets_match_classic_difficulties() {
        assert_eq!(GameConfig::beginner().total_cells(), 81);
        assert_eq!(GameConfig::intermediate().mines, 40);
        assert_eq!(GameConfig::expert().size, (16, 30));
    }

    #[test]
    fn validate_start_checks_caller_preconditions() {
        let config = GameConfig::beginner();

        assert_eq!(config.validate_start((4, 4)), Ok((4, 4)));
        assert_eq!(config.validate_start((9, 0)), Err(GameError::InvalidCoords));
        assert_eq!(
            GameConfig::new_unchecked((3, 4), 3).validate_start((0, 0)),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            GameConfig::new_unchecked((0, 9), 0).validate_start((0, 0)),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn mark_outcome_reports_updates() {
        assert!(MarkOutcome::Changed.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
    }
}
