//! Game session management for rotaslide.
//!
//! A [`Game`] wraps one scrambled board with everything a front end needs to
//! play it: the move counter, the win check, the optimal move count used for
//! scoring, and the optional twist mode in which the whole board view turns
//! every few moves.
//!
//! The optimal move count may be computed elsewhere, for instance on a worker
//! thread. Results are tagged with the [`GameId`] they were computed for, and
//! [`Game::resolve_optimal`] drops results that belong to an older game.
//!
//! # Examples
//!
//! ```
//! use rotaslide_core::Direction;
//! use rotaslide_game::{GameConfig, GameFactory};
//!
//! let mut factory = GameFactory::new(GameConfig::default())?;
//! let mut game = factory.new_game();
//! let solver = factory.solver();
//!
//! let outcome = solver.solve(game.initial_state());
//! assert!(game.resolve_optimal(game.id(), &outcome));
//!
//! // Some push direction always has a tile to move on a 3 × 3 board.
//! let moved = Direction::ALL
//!     .into_iter()
//!     .find_map(|dir| game.attempt_slide(dir).ok());
//! assert!(moved.is_some() || game.status().is_won());
//! # Ok::<(), rotaslide_core::BoardError>(())
//! ```

pub use self::{
    config::{GameConfig, GameFactory},
    error::MoveBlockReason,
    game::{Game, GameId, GameStatus},
    mode::GameMode,
    score::{OptimalMoves, WinSummary},
    snapshot::{GameSnapshot, TileSnapshot},
};

mod config;
mod error;
mod game;
mod mode;
mod score;
mod snapshot;
