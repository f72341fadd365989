//! Puzzle generation for rotaslide.
//!
//! A puzzle is made by scrambling a solved board with random slides and
//! rotations. Because every move can be undone, the scrambled board is always
//! solvable.
//!
//! # Examples
//!
//! ```
//! use rotaslide_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(3, 20)?;
//! let seed = PuzzleSeed::daily("2026-10-18");
//! let puzzle = generator.generate_with_seed(seed);
//! assert_eq!(puzzle.seed, seed);
//! assert_eq!(puzzle.moves.len(), 20);
//!
//! // The same seed always produces the same board.
//! assert_eq!(generator.generate_with_seed(seed).state, puzzle.state);
//! # Ok::<(), rotaslide_core::BoardError>(())
//! ```

use rotaslide_core::{BoardError, Move, PuzzleState};

pub use self::{
    random::{FixedSequence, RandomSource, SeededRandom},
    scrambler::Scrambler,
    seed::{PuzzleSeed, SeedParseError},
};

mod random;
mod scrambler;
mod seed;

/// A scrambled board together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledPuzzle {
    /// The scrambled board.
    pub state: PuzzleState,
    /// The seed that drove the scramble.
    pub seed: PuzzleSeed,
    /// The moves applied to the solved board, in order.
    pub moves: Vec<Move>,
}

/// Generates scrambled boards of a fixed size.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    solved: PuzzleState,
    scrambler: Scrambler,
}

impl PuzzleGenerator {
    /// Creates a generator for `size × size` boards scrambled with `steps` moves.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if the size is not supported.
    pub fn new(size: u8, steps: usize) -> Result<Self, BoardError> {
        Ok(Self {
            solved: PuzzleState::new(size)?,
            scrambler: Scrambler::new(steps),
        })
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.solved.size()
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> ScrambledPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> ScrambledPuzzle {
        log::debug!("generating puzzle from seed {seed}");
        let mut state = self.solved.clone();
        let moves = self
            .scrambler
            .scramble(&mut state, &mut SeededRandom::new(seed));
        ScrambledPuzzle { state, seed, moves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_rejects_invalid_size() {
        assert!(PuzzleGenerator::new(0, 20).is_err());
    }

    #[test]
    fn test_generated_puzzle_replays_from_moves() {
        let generator = PuzzleGenerator::new(4, 40).unwrap();
        let puzzle = generator.generate();
        let mut state = PuzzleState::new(4).unwrap();
        for mv in &puzzle.moves {
            assert!(mv.apply(&mut state));
        }
        assert_eq!(state, puzzle.state);
    }
}
