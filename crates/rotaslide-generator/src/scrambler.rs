//! Scrambling by random reversible moves.

use rotaslide_core::{Move, PuzzleState};

use crate::random::{RandomSource, pick_index};

/// Scrambles a board by applying random slides and rotations.
///
/// Every step picks one of the tiles next to the empty slot, then flips a coin
/// to either slide it or rotate it. Each of those moves has an inverse, so any
/// scramble of a solved board can be walked back: the result is solvable by
/// construction and needs no parity check.
///
/// # Examples
///
/// ```
/// use rotaslide_core::{PuzzleState, inverse_sequence};
/// use rotaslide_generator::{PuzzleSeed, Scrambler, SeededRandom};
///
/// let mut state = PuzzleState::new(3)?;
/// let mut random = SeededRandom::new(PuzzleSeed::daily("2026-10-18"));
/// let moves = Scrambler::new(20).scramble(&mut state, &mut random);
/// assert_eq!(moves.len(), 20);
///
/// for mv in inverse_sequence(&moves) {
///     assert!(mv.apply(&mut state));
/// }
/// assert!(state.is_solved());
/// # Ok::<(), rotaslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrambler {
    steps: usize,
}

impl Scrambler {
    /// Creates a scrambler that performs `steps` iterations.
    #[must_use]
    pub const fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Returns the number of iterations per scramble.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Scrambles `state` in place and returns the moves applied, in order.
    ///
    /// Each iteration draws twice from `random`: once to choose among the
    /// slidable tiles (ordered by id) and once for the slide/rotate coin, where
    /// a draw below one half slides. Iterations with no slidable tile, which
    /// only happen on a 1 × 1 board, are skipped without drawing.
    pub fn scramble<R>(&self, state: &mut PuzzleState, random: &mut R) -> Vec<Move>
    where
        R: RandomSource + ?Sized,
    {
        let mut moves = Vec::with_capacity(self.steps);
        for step in 0..self.steps {
            let movable = state.slidable_tiles();
            if movable.is_empty() {
                log::trace!("scramble step {step}: no slidable tile, skipped");
                continue;
            }
            let id = movable[pick_index(random.next_f64(), movable.len())];
            let mv = if random.next_f64() < 0.5 {
                Move::Slide(id)
            } else {
                Move::Rotate(id)
            };
            let applied = mv.apply(state);
            debug_assert!(applied, "scramble picked an illegal move: {mv}");
            moves.push(mv);
        }
        log::debug!(
            "scrambled {size}×{size} board with {count} moves",
            size = state.size(),
            count = moves.len()
        );
        moves
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rotaslide_core::{Position, Rotation, TileId, inverse_sequence};

    use super::*;
    use crate::{FixedSequence, PuzzleSeed, SeededRandom};

    #[test]
    fn test_scripted_slide_then_rotate() {
        let mut state = PuzzleState::new(3).unwrap();
        // Step 1: slidable = [5, 7]; 0.75 picks 7, 0.0 slides it.
        // Step 2: slidable = [4, 6, 7]; 0.9 picks 7, 0.9 rotates it.
        let mut random = FixedSequence::new([0.75, 0.0, 0.9, 0.9]);
        let moves = Scrambler::new(2).scramble(&mut state, &mut random);

        let seven = TileId::new(7);
        assert_eq!(moves, [Move::Slide(seven), Move::Rotate(seven)]);
        let tile = state.tile(seven).unwrap();
        assert_eq!(tile.position(), Position::new(2, 2));
        assert_eq!(tile.rotation(), Rotation::R90);
        assert_eq!(state.empty(), Position::new(2, 1));
    }

    #[test]
    fn test_single_cell_board_skips_every_step() {
        let mut state = PuzzleState::new(1).unwrap();
        let moves = Scrambler::new(10).scramble(&mut state, &mut FixedSequence::new([0.5]));
        assert!(moves.is_empty());
        assert!(state.is_solved());
    }

    #[test]
    fn test_zero_steps_leaves_board_solved() {
        let mut state = PuzzleState::new(4).unwrap();
        let moves = Scrambler::new(0).scramble(&mut state, &mut FixedSequence::new([0.1]));
        assert!(moves.is_empty());
        assert!(state.is_solved());
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let seed = PuzzleSeed::daily("2026-10-18");
        let scrambler = Scrambler::new(30);

        let mut a = PuzzleState::new(3).unwrap();
        let mut b = PuzzleState::new(3).unwrap();
        let moves_a = scrambler.scramble(&mut a, &mut SeededRandom::new(seed));
        let moves_b = scrambler.scramble(&mut b, &mut SeededRandom::new(seed));
        assert_eq!(moves_a, moves_b);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn scramble_is_undone_by_inverse(
            size in 2u8..=5,
            steps in 0usize..80,
            seed in any::<[u8; 32]>(),
        ) {
            let mut state = PuzzleState::new(size).unwrap();
            let mut random = SeededRandom::new(PuzzleSeed::from_bytes(seed));
            let moves = Scrambler::new(steps).scramble(&mut state, &mut random);
            prop_assert_eq!(moves.len(), steps);

            for mv in inverse_sequence(&moves) {
                prop_assert!(mv.apply(&mut state));
            }
            prop_assert!(state.is_solved());
        }
    }
}
