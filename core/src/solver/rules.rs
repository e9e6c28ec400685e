use crate::*;

/// A single-clue deduction: every cell in `targets` is of `kind`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Deduction {
    pub kind: MoveKind,
    pub targets: Neighbors,
}

/// Applies the two single-clue rules to the cell at `coords`.
///
/// Only revealed safe cells with a non-zero count carry a clue. With `flagged`
/// flagged neighbors and `hidden` hidden ones, the hidden neighbors are all
/// mines when `count == flagged + hidden`, and all safe when
/// `count == flagged`. The mine rule is tried first. Nothing is deduced when
/// no neighbor is hidden.
pub(crate) fn deduce_at<V: BoardView + ?Sized>(view: &V, coords: Coord2) -> Option<Deduction> {
    if view.visibility(coords) != Visibility::Revealed {
        return None;
    }
    let count = view.clue(coords).filter(|&count| count > 0)?;

    let mut flagged = 0usize;
    let mut hidden = Neighbors::new();
    for pos in NeighborIter::new(coords, view.size()) {
        match view.visibility(pos) {
            Visibility::Flagged => flagged += 1,
            Visibility::Hidden => hidden.push(pos),
            Visibility::Revealed => {}
        }
    }

    if hidden.is_empty() {
        return None;
    }

    let count = usize::from(count);
    let kind = if count == flagged + hidden.len() {
        MoveKind::Mine
    } else if count == flagged {
        MoveKind::Safe
    } else {
        return None;
    };

    Some(Deduction {
        kind,
        targets: hidden,
    })
}
