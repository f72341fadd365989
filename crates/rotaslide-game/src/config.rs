use rotaslide_core::BoardError;
use rotaslide_generator::{PuzzleGenerator, PuzzleSeed};
use rotaslide_solver::{OptimalMoveSolver, SearchLimits};
use serde::{Deserialize, Serialize};

use crate::{Game, GameId, GameMode};

/// Settings for new games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    pub size: u8,
    /// Random moves applied to the solved board.
    pub scramble_steps: usize,
    /// Classic or twist play.
    pub mode: GameMode,
    /// Budget for the optimal move search.
    pub limits: SearchLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            scramble_steps: 20,
            mode: GameMode::Classic,
            limits: SearchLimits::default(),
        }
    }
}

/// Starts games from a [`GameConfig`].
///
/// Every game gets a fresh [`GameId`], greater than all ids handed out before.
///
/// # Examples
///
/// ```
/// use rotaslide_game::{GameConfig, GameFactory};
///
/// let mut factory = GameFactory::new(GameConfig::default())?;
/// let first = factory.new_game();
/// let second = factory.new_game();
/// assert!(second.id() > first.id());
/// # Ok::<(), rotaslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameFactory {
    config: GameConfig,
    generator: PuzzleGenerator,
    next_id: GameId,
}

impl GameFactory {
    /// Creates a factory.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if the configured size is not supported.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        Ok(Self {
            generator: PuzzleGenerator::new(config.size, config.scramble_steps)?,
            config,
            next_id: GameId::new(0),
        })
    }

    /// Returns the configuration games are started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a solver honoring the configured search limits.
    #[must_use]
    pub fn solver(&self) -> OptimalMoveSolver {
        OptimalMoveSolver::new(self.config.limits)
    }

    /// Starts a game on a freshly scrambled board.
    pub fn new_game(&mut self) -> Game {
        self.new_game_with_seed(PuzzleSeed::random())
    }

    /// Starts a game on the board determined by `seed`.
    pub fn new_game_with_seed(&mut self, seed: PuzzleSeed) -> Game {
        let id = self.next_id;
        self.next_id = id.next();
        let puzzle = self.generator.generate_with_seed(seed);
        Game::from_puzzle(id, puzzle, self.config.mode)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.size, 3);
        assert_eq!(config.scramble_steps, 20);
        assert!(matches!(config.mode, GameMode::Classic));
        assert_eq!(config.limits.max_expansions, 50_000);
        assert_eq!(config.limits.fallback_moves, 30);
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let config = GameConfig {
            size: 0,
            ..GameConfig::default()
        };
        assert!(GameFactory::new(config).is_err());
    }

    #[test]
    fn test_seeded_games_share_board_but_not_id() {
        let mut factory = GameFactory::new(GameConfig::default()).unwrap();
        let seed = PuzzleSeed::daily("2026-10-18");
        let first = factory.new_game_with_seed(seed);
        let second = factory.new_game_with_seed(seed);
        assert_eq!(first.state(), second.state());
        assert_eq!(first.seed(), Some(seed));
        assert_eq!(first.id(), GameId::new(0));
        assert_eq!(second.id(), GameId::new(1));
    }

    #[test]
    fn test_games_use_configured_mode_and_size() {
        let mode = GameMode::Twist {
            interval: NonZeroU32::new(5).unwrap(),
        };
        let mut factory = GameFactory::new(GameConfig {
            size: 4,
            mode,
            ..GameConfig::default()
        })
        .unwrap();
        let game = factory.new_game();
        assert_eq!(game.mode(), mode);
        assert_eq!(game.state().size(), 4);
        assert!(game.optimal().is_computing());
    }
}
