//! Single player moves and their inverses.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{PuzzleState, TileId};

/// One unit-cost move on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Slide the tile into the empty slot.
    Slide(TileId),
    /// Turn the tile 90° clockwise.
    Rotate(TileId),
}

impl Move {
    /// Applies the move to `state`.
    ///
    /// Returns `false` and leaves the state untouched if the move is not legal
    /// in the current position.
    pub fn apply(self, state: &mut PuzzleState) -> bool {
        match self {
            Self::Slide(id) => state.slide(id),
            Self::Rotate(id) => state.rotate(id),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slide(id) => write!(f, "slide {id}"),
            Self::Rotate(id) => write!(f, "rotate {id}"),
        }
    }
}

/// Returns the moves that undo `moves`, in the order they must be applied.
///
/// A slide is undone by sliding the same tile back; a rotation is undone by
/// three further rotations.
///
/// # Examples
///
/// ```
/// use rotaslide_core::{Move, PuzzleState, TileId, inverse_sequence};
///
/// let mut state = PuzzleState::new(3)?;
/// let moves = [Move::Slide(TileId::new(7)), Move::Rotate(TileId::new(7))];
/// for mv in moves {
///     assert!(mv.apply(&mut state));
/// }
/// assert!(!state.is_solved());
///
/// for mv in inverse_sequence(&moves) {
///     assert!(mv.apply(&mut state));
/// }
/// assert!(state.is_solved());
/// # Ok::<(), rotaslide_core::BoardError>(())
/// ```
#[must_use]
pub fn inverse_sequence(moves: &[Move]) -> Vec<Move> {
    let mut inverse = Vec::with_capacity(moves.len());
    for &mv in moves.iter().rev() {
        match mv {
            Move::Slide(_) => inverse.push(mv),
            Move::Rotate(_) => inverse.extend([mv; 3]),
        }
    }
    inverse
}
