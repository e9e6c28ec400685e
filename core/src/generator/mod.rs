use crate::*;
pub use guaranteed::*;

mod guaranteed;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Grid;
}

/// Result of a bounded generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    pub grid: Grid,
    /// Layouts tried, including the one returned.
    pub attempts: u32,
    /// `false` when the budget ran out and `grid` is the mine-free fallback.
    pub solvable: bool,
}

impl Generation {
    pub const fn is_fallback(&self) -> bool {
        !self.solvable
    }
}
