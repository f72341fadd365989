//! Command-line arguments.

use std::num::NonZeroU32;

use clap::Parser;
use rotaslide_game::{GameConfig, GameMode};
use rotaslide_generator::PuzzleSeed;
use rotaslide_solver::SearchLimits;

/// Slide tiles into the gap and turn them upright.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub size: u8,

    /// Random moves used to scramble each board.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    pub steps: usize,

    /// Seed for the first board, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "daily")]
    pub seed: Option<PuzzleSeed>,

    /// Play the shared daily board for this label, typically a date.
    #[arg(long, value_name = "LABEL")]
    pub daily: Option<String>,

    /// Turn the whole board every K moves.
    #[arg(long, value_name = "K")]
    pub twist: Option<NonZeroU32>,

    /// Expansion budget for the optimal move search.
    #[arg(long, value_name = "COUNT", default_value_t = SearchLimits::DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: usize,

    /// Move count reported when the search gives up.
    #[arg(long, value_name = "MOVES", default_value_t = SearchLimits::DEFAULT_FALLBACK_MOVES)]
    pub fallback: u32,
}

impl Args {
    /// Returns the settings for new games.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        let mode = match self.twist {
            Some(interval) => GameMode::Twist { interval },
            None => GameMode::Classic,
        };
        GameConfig {
            size: self.size,
            scramble_steps: self.steps,
            mode,
            limits: SearchLimits {
                max_expansions: self.max_expansions,
                fallback_moves: self.fallback,
            },
        }
    }

    /// Returns the seed for the first board, if one was requested.
    #[must_use]
    pub fn first_seed(&self) -> Option<PuzzleSeed> {
        self.seed
            .or_else(|| self.daily.as_deref().map(PuzzleSeed::daily))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_config() {
        let args = Args::parse_from(["rotaslide"]);
        assert_eq!(args.config(), GameConfig::default());
        assert_eq!(args.first_seed(), None);
    }

    #[test]
    fn test_twist_and_limits() {
        let args = Args::parse_from([
            "rotaslide",
            "--size",
            "4",
            "--twist",
            "5",
            "--max-expansions",
            "100",
            "--fallback",
            "40",
        ]);
        let config = args.config();
        assert_eq!(config.size, 4);
        assert_eq!(
            config.mode,
            GameMode::Twist {
                interval: NonZeroU32::new(5).unwrap()
            }
        );
        assert_eq!(config.limits.max_expansions, 100);
        assert_eq!(config.limits.fallback_moves, 40);
    }

    #[test]
    fn test_daily_seed() {
        let args = Args::parse_from(["rotaslide", "--daily", "2026-10-18"]);
        assert_eq!(args.first_seed(), Some(PuzzleSeed::daily("2026-10-18")));
    }

    #[test]
    fn test_seed_and_daily_conflict() {
        let seed = "00".repeat(32);
        let result = Args::try_parse_from(["rotaslide", "--seed", &seed, "--daily", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_twist_is_rejected() {
        assert!(Args::try_parse_from(["rotaslide", "--twist", "0"]).is_err());
    }
}
