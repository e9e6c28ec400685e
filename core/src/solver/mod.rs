//! Single-clue logical solver.
//!
//! The solver only ever combines one revealed count with that cell's own
//! neighborhood. Boards that need several clues reasoned about together are
//! reported as unsolvable, which keeps generated boards within reach of the
//! hints this module produces.

use serde::{Deserialize, Serialize};

use crate::*;
use rules::*;
use shadow::*;

mod rules;
mod shadow;

/// Next deducible move on a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub coords: Coord2,
    pub kind: MoveKind,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Full scans over the board, including the final one that found nothing.
    pub passes: u32,
    /// Cells opened, by the initial reveal and by safe deductions.
    pub opened_cells: CellCount,
    pub deduced_mines: CellCount,
    pub solved: bool,
}

/// Whether every safe cell of `grid` can be deduced starting from `start`.
pub fn is_solvable(grid: &Grid, start: Coord2) -> bool {
    analyze(grid, start).solved
}

/// Runs the deduction loop on a private copy of `grid`'s visible state and
/// reports how it went. `grid` itself is never modified.
pub fn analyze(grid: &Grid, start: Coord2) -> SolveStats {
    let mut board = ShadowBoard::new(grid);
    let mut stats = SolveStats {
        opened_cells: expand(&mut board, start),
        ..SolveStats::default()
    };

    let (rows, cols) = grid.size();
    let mut progress = true;
    while progress {
        progress = false;
        stats.passes += 1;

        for row in 0..rows {
            for col in 0..cols {
                let Some(deduction) = deduce_at(&board, (row, col)) else {
                    continue;
                };
                progress = true;

                match deduction.kind {
                    MoveKind::Mine => {
                        for pos in deduction.targets {
                            if board.flag(pos) {
                                stats.deduced_mines += 1;
                            }
                        }
                    }
                    MoveKind::Safe => {
                        for pos in deduction.targets {
                            stats.opened_cells += expand(&mut board, pos);
                        }
                    }
                }
            }
        }
    }

    stats.solved = board.is_complete();
    log::trace!("Solver finished from {:?}: {:?}", start, stats);
    stats
}

/// Finds the first move a single clue proves, scanning revealed cells in
/// row-major order against the grid's real reveals and flags.
///
/// `None` means no single-clue deduction exists; callers that still want a
/// hint have to ask something smarter.
pub fn find_hint(grid: &Grid) -> Option<Hint> {
    grid.cells().find_map(|cell| {
        let deduction = deduce_at(grid, cell.coords())?;
        let &coords = deduction.targets.first()?;
        Some(Hint {
            coords,
            kind: deduction.kind,
        })
    })
}
