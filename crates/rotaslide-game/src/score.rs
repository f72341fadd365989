use std::fmt::{self, Display};

use rotaslide_solver::SolveOutcome;
use serde::{Deserialize, Serialize};

/// The best known move count for a game's starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum OptimalMoves {
    /// The solver has not answered yet.
    Computing,
    /// The solver found a shortest solution of this length.
    Exact(u32),
    /// The solver gave up; this is its fallback figure.
    Approximate(u32),
}

impl OptimalMoves {
    /// Returns the move count, if known.
    #[must_use]
    pub fn value(self) -> Option<u32> {
        match self {
            Self::Computing => None,
            Self::Exact(moves) | Self::Approximate(moves) => Some(moves),
        }
    }
}

impl From<&SolveOutcome> for OptimalMoves {
    fn from(outcome: &SolveOutcome) -> Self {
        if outcome.is_exact() {
            Self::Exact(outcome.moves())
        } else {
            Self::Approximate(outcome.moves())
        }
    }
}

impl Display for OptimalMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computing => f.write_str("computing…"),
            Self::Exact(moves) => write!(f, "{moves}"),
            Self::Approximate(moves) => write!(f, "~{moves}"),
        }
    }
}

/// The post-game score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Moves the player made.
    pub moves_taken: u32,
    /// Best known move count for the starting board.
    pub optimal_moves: OptimalMoves,
    /// `moves_taken - optimal`. Can be negative when the optimum is only a
    /// fallback estimate.
    pub extra: i64,
}

impl WinSummary {
    pub(crate) fn new(moves_taken: u32, optimal_moves: OptimalMoves) -> Option<Self> {
        let optimal = optimal_moves.value()?;
        Some(Self {
            moves_taken,
            optimal_moves,
            extra: i64::from(moves_taken) - i64::from(optimal),
        })
    }
}

impl Display for WinSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "solved in {} moves (optimal {}, extra {})",
            self.moves_taken, self.optimal_moves, self.extra
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_waits_for_optimal() {
        assert_eq!(WinSummary::new(5, OptimalMoves::Computing), None);
    }

    #[test]
    fn test_extra_counts_moves_above_optimal() {
        let summary = WinSummary::new(7, OptimalMoves::Exact(4)).unwrap();
        assert_eq!(summary.extra, 3);
        assert_eq!(summary.to_string(), "solved in 7 moves (optimal 4, extra 3)");
    }

    #[test]
    fn test_extra_may_be_negative_against_fallback() {
        let summary = WinSummary::new(12, OptimalMoves::Approximate(30)).unwrap();
        assert_eq!(summary.extra, -18);
        assert_eq!(summary.to_string(), "solved in 12 moves (optimal ~30, extra -18)");
    }
}
