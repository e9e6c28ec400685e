use serde::{Deserialize, Serialize};

use crate::*;

/// What a deduction or a hint says about a hidden cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Safe,
    Mine,
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed,
    Flagged,
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    mine: bool,
    visibility: Visibility,
    neighbor_count: u8,
    hint: Option<MoveKind>,
}

impl Cell {
    pub const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            mine: false,
            visibility: Visibility::Hidden,
            neighbor_count: 0,
            hint: None,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn is_revealed(&self) -> bool {
        matches!(self.visibility, Visibility::Revealed)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.visibility, Visibility::Flagged)
    }

    /// Adjacent mine count; only meaningful when the cell is not a mine.
    pub const fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    /// Adjacent mine count for safe cells, `None` for mines.
    pub const fn clue(&self) -> Option<u8> {
        if self.mine {
            None
        } else {
            Some(self.neighbor_count)
        }
    }

    /// Transient hint highlight, consumed only by the UI.
    pub const fn hint(&self) -> Option<MoveKind> {
        self.hint
    }

    pub(crate) fn set_mine(&mut self) {
        self.mine = true;
    }

    pub(crate) fn set_neighbor_count(&mut self, count: u8) {
        self.neighbor_count = count;
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        if !visibility.is_hidden() {
            self.hint = None;
        }
    }

    pub(crate) fn set_hint(&mut self, hint: Option<MoveKind>) {
        self.hint = hint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_default_state() {
        let cell = Cell::new((2, 5));

        assert_eq!(cell.coords(), (2, 5));
        assert_eq!((cell.row(), cell.col()), (2, 5));
        assert!(!cell.is_mine());
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
        assert_eq!(cell.neighbor_count(), 0);
        assert_eq!(cell.hint(), None);
    }

    #[test]
    fn mines_have_no_clue() {
        let mut cell = Cell::new((0, 0));
        assert_eq!(cell.clue(), Some(0));

        cell.set_mine();
        assert_eq!(cell.clue(), None);
    }

    #[test]
    fn leaving_hidden_state_clears_hint() {
        let mut cell = Cell::new((0, 0));
        cell.set_hint(Some(MoveKind::Safe));

        cell.set_visibility(Visibility::Revealed);

        assert!(cell.is_revealed());
        assert_eq!(cell.hint(), None);
    }
}
