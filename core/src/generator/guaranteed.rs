use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Attempt budget used by [`generate_guaranteed_board`].
pub const DEFAULT_MAX_ATTEMPTS: u32 = 500;

/// Generation strategy that keeps the 3×3 block around the start free of mines
/// and only accepts layouts the logical solver can clear from there.
#[derive(Clone, Debug, PartialEq)]
pub struct GuaranteedBoardGenerator {
    seed: u64,
    start: Coord2,
    max_attempts: u32,
}

impl GuaranteedBoardGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self {
            seed,
            start,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generate_report(self, config: GameConfig) -> Generation {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_with_budget(config, self.start, self.max_attempts, &mut rng)
    }
}

impl BoardGenerator for GuaranteedBoardGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        self.generate_report(config).grid
    }
}

/// Produces a board that is solvable without guessing from `start`, or a board
/// without mines once [`DEFAULT_MAX_ATTEMPTS`] layouts have been rejected.
///
/// Every cell of the returned grid is hidden.
pub fn generate_guaranteed_board<R: Rng + ?Sized>(
    config: GameConfig,
    start: Coord2,
    rng: &mut R,
) -> Grid {
    generate_with_budget(config, start, DEFAULT_MAX_ATTEMPTS, rng).grid
}

pub fn generate_with_budget<R: Rng + ?Sized>(
    config: GameConfig,
    start: Coord2,
    max_attempts: u32,
    rng: &mut R,
) -> Generation {
    if !in_bounds(start, config.size) {
        log::warn!(
            "Start {:?} lies outside a {:?} board, no layout can be solved from it",
            start,
            config.size
        );
    } else if config.mines.saturating_add(9) >= config.total_cells() {
        log::warn!(
            "{} mines leave almost no room around the start on a {:?} board",
            config.mines,
            config.size
        );
    }

    for attempt in 1..=max_attempts {
        let grid = place_mines(config, start, rng);
        if is_solvable(&grid, start) {
            log::debug!(
                "Generated solvable {:?} board with {} mines after {} attempts",
                config.size,
                grid.mine_count(),
                attempt
            );
            return Generation {
                grid,
                attempts: attempt,
                solvable: true,
            };
        }
    }

    log::warn!(
        "No solvable layout after {} attempts, fallback to an empty board",
        max_attempts
    );
    Generation {
        grid: Grid::new(config.size),
        attempts: max_attempts,
        solvable: false,
    }
}

/// Places `config.mines` mines uniformly at random, never within one cell of
/// `start`, and computes every neighbor count. No solvability check.
pub fn place_mines<R: Rng + ?Sized>(config: GameConfig, start: Coord2, rng: &mut R) -> Grid {
    let mut grid = Grid::new(config.size);

    let mut free_cells: Vec<Coord2> = grid
        .cells()
        .map(Cell::coords)
        .filter(|&coords| chebyshev_distance(coords, start) > 1)
        .collect();

    let requested = usize::from(config.mines);
    if requested > free_cells.len() {
        log::warn!(
            "Only {} cells available outside the start zone, requested {} mines",
            free_cells.len(),
            requested
        );
    }

    for _ in 0..requested.min(free_cells.len()) {
        let pick = rng.random_range(0..free_cells.len());
        grid.place_mine(free_cells.swap_remove(pick));
    }

    grid.compute_neighbor_counts();
    grid
}
