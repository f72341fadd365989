//! Optimal move counting for rotaslide boards.
//!
//! [`OptimalMoveSolver`] finds the fewest slides and quarter turns that bring
//! every tile home and upright. Games run it once per scramble to score the
//! player against the best possible result.
//!
//! # Examples
//!
//! ```
//! use rotaslide_generator::PuzzleGenerator;
//! use rotaslide_solver::OptimalMoveSolver;
//!
//! let generator = PuzzleGenerator::new(3, 10)?;
//! let puzzle = generator.generate();
//!
//! let outcome = OptimalMoveSolver::default().solve(&puzzle.state);
//! // Ten scramble moves can always be undone in at most thirty, and the
//! // fallback when the search gives up is thirty as well.
//! assert!(outcome.moves() <= 30);
//! # Ok::<(), rotaslide_core::BoardError>(())
//! ```

pub use self::{
    heuristic::estimate,
    optimal::{OptimalMoveSolver, SearchLimits, SolveOutcome},
};

mod heuristic;
mod optimal;
