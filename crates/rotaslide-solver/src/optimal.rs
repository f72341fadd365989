//! A* search for the shortest solution of a board.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use rotaslide_core::{Direction, Move, PuzzleState, StateKey};
use serde::{Deserialize, Serialize};

use crate::estimate;

/// Bounds on how much work a single solve may do.
///
/// # Examples
///
/// ```
/// use rotaslide_solver::SearchLimits;
///
/// let limits = SearchLimits::default();
/// assert_eq!(limits.max_expansions, 50_000);
/// assert_eq!(limits.fallback_moves, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of states expanded before giving up.
    pub max_expansions: usize,
    /// Move count reported when the search gives up.
    pub fallback_moves: u32,
}

impl SearchLimits {
    /// Expansion budget used when none is configured.
    pub const DEFAULT_MAX_EXPANSIONS: usize = 50_000;
    /// Fallback move count used when none is configured.
    pub const DEFAULT_FALLBACK_MOVES: u32 = 30;
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: Self::DEFAULT_MAX_EXPANSIONS,
            fallback_moves: Self::DEFAULT_FALLBACK_MOVES,
        }
    }
}

/// The result of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOutcome {
    moves: u32,
    exact: bool,
    expansions: usize,
    path: Option<Vec<Move>>,
}

impl SolveOutcome {
    /// Returns the move count: the optimum if [`is_exact`](Self::is_exact),
    /// otherwise the configured fallback.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns `true` if the search reached the solved board.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns the number of states expanded.
    #[must_use]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Returns a shortest move sequence to the solved board, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&[Move]> {
        self.path.as_deref()
    }
}

/// Computes the fewest slides and rotations needed to solve a board.
///
/// The solver runs A* over whole-board arrangements. Successors of a state
/// are the slides into the empty slot and a quarter turn of each tile that is
/// not upright; turning an upright tile can never be part of a shortest
/// solution. States are ordered by `f = g + h` with [`estimate`] as `h`; ties
/// go to the deeper state, then to the state generated first. Each
/// arrangement is expanded at most once.
///
/// The solver never fails: if the expansion budget runs out, or the board
/// cannot be solved at all, it reports [`SearchLimits::fallback_moves`].
///
/// # Examples
///
/// ```
/// use rotaslide_core::PuzzleState;
/// use rotaslide_solver::OptimalMoveSolver;
///
/// let solver = OptimalMoveSolver::default();
///
/// let solved = PuzzleState::new(3)?;
/// assert_eq!(solver.optimal_moves(&solved), 0);
///
/// // Tile 7 slid right and turned to 270°: one rotation and one slide fix it.
/// let state: PuzzleState = "0 1 2 / 3 4 5 / 6 _ 7:270".parse()?;
/// let outcome = solver.solve(&state);
/// assert!(outcome.is_exact());
/// assert_eq!(outcome.moves(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalMoveSolver {
    limits: SearchLimits,
}

struct SearchNode {
    key: StateKey,
    // Dropped once the node is expanded; only the parent link is needed after that.
    state: Option<PuzzleState>,
    parent: Option<(usize, Move)>,
    g: u32,
}

impl OptimalMoveSolver {
    /// Creates a solver with the given limits.
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Returns the solver's limits.
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Returns the fewest moves that solve `state`, or the fallback value.
    #[must_use]
    pub fn optimal_moves(&self, state: &PuzzleState) -> u32 {
        self.solve(state).moves()
    }

    /// Returns the first move of a shortest solution.
    ///
    /// Returns `None` if the board is already solved or no solution was found
    /// within the budget.
    #[must_use]
    pub fn next_move(&self, state: &PuzzleState) -> Option<Move> {
        self.solve(state).path()?.first().copied()
    }

    /// Searches for a shortest solution of `state`.
    #[must_use]
    pub fn solve(&self, state: &PuzzleState) -> SolveOutcome {
        let goal = StateKey::goal(state.size());
        let root_key = state.state_key();

        let mut nodes = vec![SearchNode {
            key: root_key.clone(),
            state: Some(state.clone()),
            parent: None,
            g: 0,
        }];
        // Among equal f the deeper node goes first, then the one generated first;
        // arena indices grow with insertion order.
        let mut open = BinaryHeap::from([Reverse((estimate(state), Reverse(0), 0))]);
        let mut best_g = HashMap::from([(root_key, 0)]);
        let mut closed = HashSet::new();
        let mut expansions = 0;

        while let Some(Reverse((_, _, index))) = open.pop() {
            let node = &mut nodes[index];
            if closed.contains(&node.key) {
                continue;
            }
            if node.key == goal {
                let moves = node.g;
                let path = reconstruct_path(&nodes, index);
                log::debug!("solved in {moves} moves after {expansions} expansions");
                return SolveOutcome {
                    moves,
                    exact: true,
                    expansions,
                    path: Some(path),
                };
            }
            if expansions >= self.limits.max_expansions {
                log::debug!("search budget of {expansions} expansions exhausted");
                return self.fallback(expansions);
            }
            expansions += 1;

            closed.insert(node.key.clone());
            let Some(current) = node.state.take() else {
                continue;
            };
            let g = node.g + 1;

            for mv in successor_moves(&current) {
                let mut next = current.clone();
                mv.apply(&mut next);
                let key = next.state_key();
                if closed.contains(&key) || best_g.get(&key).is_some_and(|&best| best <= g) {
                    continue;
                }
                best_g.insert(key.clone(), g);
                let f = g + estimate(&next);
                open.push(Reverse((f, Reverse(g), nodes.len())));
                nodes.push(SearchNode {
                    key,
                    state: Some(next),
                    parent: Some((index, mv)),
                    g,
                });
            }
        }

        log::debug!("search space exhausted after {expansions} expansions");
        self.fallback(expansions)
    }

    fn fallback(&self, expansions: usize) -> SolveOutcome {
        SolveOutcome {
            moves: self.limits.fallback_moves,
            exact: false,
            expansions,
            path: None,
        }
    }
}

/// Slides into the empty slot, then quarter turns of every turned tile.
fn successor_moves(state: &PuzzleState) -> impl Iterator<Item = Move> + '_ {
    let slides = Direction::ALL
        .into_iter()
        .filter_map(|dir| state.tile_toward(dir))
        .map(Move::Slide);
    let rotations = state
        .tiles()
        .iter()
        .filter(|tile| !tile.rotation().is_upright())
        .map(|tile| Move::Rotate(tile.id()));
    slides.chain(rotations)
}

fn reconstruct_path(nodes: &[SearchNode], mut index: usize) -> Vec<Move> {
    let mut path = Vec::new();
    while let Some((parent, mv)) = nodes[index].parent {
        path.push(mv);
        index = parent;
    }
    path.reverse();
    path
}
