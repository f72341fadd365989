use std::fmt::{self, Display};

use rotaslide_core::{Direction, Move, Position, PuzzleState, Rotation};
use rotaslide_generator::{PuzzleSeed, ScrambledPuzzle};
use rotaslide_solver::{OptimalMoveSolver, SolveOutcome};
use serde::{Deserialize, Serialize};

use crate::{
    GameMode, GameSnapshot, MoveBlockReason, OptimalMoves, TileSnapshot, WinSummary, mode,
};

/// Identifies one game among those started in a run.
///
/// Ids increase with every new game, so a background result tagged with an
/// older id can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// Every tile is home and upright; no more moves are accepted.
    Won,
}

/// A rotaslide game session.
///
/// Owns the live board together with the move counter, the status and the
/// best known move count for the starting board. Moves arrive as screen-space
/// intents through [`attempt_slide`](Self::attempt_slide) and
/// [`attempt_rotate`](Self::attempt_rotate); in twist mode they are mapped
/// through the current board orientation first.
///
/// # Examples
///
/// ```
/// use rotaslide_core::{Direction, PuzzleState};
/// use rotaslide_game::{Game, GameId, GameMode};
/// use rotaslide_solver::OptimalMoveSolver;
///
/// let state: PuzzleState = "0 1 2 / 3 4 5 / 6 _ 7".parse()?;
/// let mut game = Game::new(GameId::new(0), state, GameMode::Classic);
/// game.compute_optimal(&OptimalMoveSolver::default());
///
/// game.attempt_slide(Direction::Left)?;
/// assert!(game.status().is_won());
///
/// let summary = game.summary().expect("won with a known optimum");
/// assert_eq!(summary.moves_taken, 1);
/// assert_eq!(summary.extra, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    mode: GameMode,
    seed: Option<PuzzleSeed>,
    initial: PuzzleState,
    state: PuzzleState,
    moves_taken: u32,
    status: GameStatus,
    optimal: OptimalMoves,
}

impl Game {
    /// Starts a game on `state`.
    ///
    /// The optimal move count starts out as [`OptimalMoves::Computing`]. A
    /// board that is already solved starts out won.
    #[must_use]
    pub fn new(id: GameId, state: PuzzleState, mode: GameMode) -> Self {
        let status = if state.is_solved() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        log::debug!("game {id}: {size}×{size} {mode}", size = state.size());
        Self {
            id,
            mode,
            seed: None,
            initial: state.clone(),
            state,
            moves_taken: 0,
            status,
            optimal: OptimalMoves::Computing,
        }
    }

    /// Starts a game on a generated puzzle, remembering its seed.
    #[must_use]
    pub fn from_puzzle(id: GameId, puzzle: ScrambledPuzzle, mode: GameMode) -> Self {
        let ScrambledPuzzle {
            state,
            seed,
            moves: _,
        } = puzzle;
        Self {
            seed: Some(seed),
            ..Self::new(id, state, mode)
        }
    }

    /// Returns the game's id.
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns how the game is played.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the seed the board was scrambled from, if it was generated.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the board as it was when the game started.
    ///
    /// This is the board the optimal move count refers to.
    #[must_use]
    pub fn initial_state(&self) -> &PuzzleState {
        &self.initial
    }

    /// Returns the live board.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Returns the number of accepted moves.
    #[must_use]
    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }

    /// Returns the game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the best known move count for the starting board.
    #[must_use]
    pub fn optimal(&self) -> OptimalMoves {
        self.optimal
    }

    /// Returns how far the board view is currently turned.
    #[must_use]
    pub fn orientation(&self) -> Rotation {
        self.mode.orientation_after(self.moves_taken)
    }

    /// Slides the tile that travels in the screen direction `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveBlockReason::GameOver`] once the game is won and
    /// [`MoveBlockReason::NoTileToSlide`] if no tile sits on the far side of
    /// the empty slot.
    pub fn attempt_slide(&mut self, direction: Direction) -> Result<Move, MoveBlockReason> {
        self.ensure_in_progress()?;
        let board_direction = mode::board_direction(direction, self.orientation());
        let id = self
            .state
            .tile_toward(board_direction)
            .ok_or(MoveBlockReason::NoTileToSlide)?;
        Ok(self.accept(Move::Slide(id)))
    }

    /// Turns the tile drawn at the screen cell `position` by 90°.
    ///
    /// # Errors
    ///
    /// Returns [`MoveBlockReason::GameOver`] once the game is won,
    /// [`MoveBlockReason::OutOfBounds`] for a cell off the board and
    /// [`MoveBlockReason::EmptyCell`] for the empty slot.
    pub fn attempt_rotate(&mut self, position: Position) -> Result<Move, MoveBlockReason> {
        self.ensure_in_progress()?;
        let size = self.state.size();
        if !position.is_within(size) {
            return Err(MoveBlockReason::OutOfBounds);
        }
        let board_position = mode::board_position(position, self.orientation(), size);
        let id = self
            .state
            .tile_at(board_position)
            .ok_or(MoveBlockReason::EmptyCell)?
            .id();
        Ok(self.accept(Move::Rotate(id)))
    }

    fn ensure_in_progress(&self) -> Result<(), MoveBlockReason> {
        if self.status.is_won() {
            return Err(MoveBlockReason::GameOver);
        }
        Ok(())
    }

    fn accept(&mut self, mv: Move) -> Move {
        let orientation = self.orientation();
        let applied = mv.apply(&mut self.state);
        debug_assert!(applied, "game chose an illegal move: {mv}");
        self.moves_taken += 1;
        log::trace!("game {}: move {} is {mv}", self.id, self.moves_taken);

        if self.state.is_solved() {
            self.status = GameStatus::Won;
            log::info!("game {} won in {} moves", self.id, self.moves_taken);
        } else if self.orientation() != orientation {
            log::debug!("game {}: board turned to {}", self.id, self.orientation());
        }
        mv
    }

    /// Records a solver result for the game `id`.
    ///
    /// Results for any other game are stale and ignored. Returns `true` if the
    /// result was recorded.
    pub fn resolve_optimal(&mut self, id: GameId, outcome: &SolveOutcome) -> bool {
        if id != self.id {
            log::debug!("dropping solver result for game {id}, current game is {}", self.id);
            return false;
        }
        self.optimal = OptimalMoves::from(outcome);
        log::debug!("game {id}: optimal moves {}", self.optimal);
        true
    }

    /// Solves the starting board on the current thread and records the result.
    pub fn compute_optimal(&mut self, solver: &OptimalMoveSolver) -> OptimalMoves {
        let outcome = solver.solve(&self.initial);
        self.resolve_optimal(self.id, &outcome);
        self.optimal
    }

    /// Suggests the first move of a shortest solution from the live board.
    ///
    /// Returns `None` once the game is won or if the solver gives up.
    #[must_use]
    pub fn hint(&self, solver: &OptimalMoveSolver) -> Option<Move> {
        if self.status.is_won() {
            return None;
        }
        solver.next_move(&self.state)
    }

    /// Returns the post-game score.
    ///
    /// Returns `None` until the game is won and the optimal move count is known.
    #[must_use]
    pub fn summary(&self) -> Option<WinSummary> {
        if !self.status.is_won() {
            return None;
        }
        WinSummary::new(self.moves_taken, self.optimal)
    }

    /// Returns a read-only copy of the game for renderers.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            size: self.state.size(),
            tiles: self.state.tiles().iter().map(TileSnapshot::from).collect(),
            empty: self.state.empty(),
            moves_taken: self.moves_taken,
            status: self.status,
            orientation: self.orientation(),
            optimal: self.optimal,
        }
    }
}
