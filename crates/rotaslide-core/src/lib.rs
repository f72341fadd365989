//! Core data structures for the rotaslide puzzle.
//!
//! A rotaslide board is an `N × N` grid holding `N² - 1` square tiles and one
//! empty slot. A tile next to the empty slot may slide into it, and any tile
//! may turn in 90° steps wherever it stands. The puzzle is solved when every
//! tile is back in its home cell and upright.
//!
//! # Overview
//!
//! - [`position`]: board coordinates ([`Position`]) and push directions ([`Direction`])
//! - [`rotation`]: tile orientation in quarter turns ([`Rotation`])
//! - [`tile`]: tiles and their stable ids ([`Tile`], [`TileId`])
//! - [`puzzle_state`]: the live board with its move rules ([`PuzzleState`]) and
//!   canonical arrangement keys ([`StateKey`])
//! - [`moves`]: unit moves and their inverses ([`Move`])
//! - [`board_text`]: a plain-text board format used by tests and tools
//!
//! # Examples
//!
//! ```
//! use rotaslide_core::{Direction, PuzzleState};
//!
//! let mut state = PuzzleState::new(3)?;
//! let id = state.tile_toward(Direction::Down).expect("a tile sits above the slot");
//! state.slide(id);
//! state.rotate(id);
//! assert!(!state.is_solved());
//! println!("{state}");
//! # Ok::<(), rotaslide_core::BoardError>(())
//! ```

pub mod board_text;
pub mod moves;
pub mod position;
pub mod puzzle_state;
pub mod rotation;
pub mod tile;

pub use self::{
    board_text::ParseBoardError,
    moves::{Move, inverse_sequence},
    position::{Direction, Position},
    puzzle_state::{BoardError, MAX_SIZE, PuzzleState, StateKey},
    rotation::Rotation,
    tile::{Tile, TileId},
};
