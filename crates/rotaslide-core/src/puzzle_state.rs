//! The board: tiles, the empty slot, and the move rules.

use serde::Serialize;
use tinyvec::ArrayVec;

use crate::{Direction, Position, Rotation, Tile, TileId};

/// The largest supported board size.
///
/// Every cell index of a board this size fits in a byte, which keeps
/// [`StateKey`]s compact.
pub const MAX_SIZE: u8 = 15;

/// Errors raised when building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board size is zero or larger than [`MAX_SIZE`].
    #[display("board size {size} is outside 1..={}", MAX_SIZE)]
    InvalidSize {
        /// The rejected size.
        size: u8,
    },
    /// The number of tiles does not match the board size.
    #[display("expected {expected} tiles, found {actual}")]
    TileCountMismatch {
        /// Tiles a board of this size holds.
        expected: usize,
        /// Tiles supplied.
        actual: usize,
    },
    /// A tile was placed outside the board.
    #[display("tile {id} placed outside the board at {position}")]
    OutOfBounds {
        /// The misplaced tile.
        id: TileId,
        /// Where it was placed.
        position: Position,
    },
    /// Two tiles were placed in the same cell.
    #[display("more than one tile placed at {position}")]
    Overlap {
        /// The doubly occupied cell.
        position: Position,
    },
}

/// The live puzzle: `N² - 1` tiles and one empty slot on an `N × N` board.
///
/// Tiles are stored by id, so iteration order is stable no matter where the
/// tiles currently sit. A cell index is kept alongside for constant-time
/// lookups by position.
///
/// # Examples
///
/// ```
/// use rotaslide_core::{Direction, Position, PuzzleState, TileId};
///
/// let mut state = PuzzleState::new(3)?;
/// assert!(state.is_solved());
/// assert_eq!(state.empty(), Position::new(2, 2));
///
/// // The tile left of the empty slot moves right into it.
/// let id = state.tile_toward(Direction::Right).expect("a tile is left of the slot");
/// assert_eq!(id, TileId::new(7));
/// assert!(state.slide(id));
/// assert_eq!(state.empty(), Position::new(2, 1));
///
/// state.rotate(id);
/// assert!(!state.is_solved());
/// # Ok::<(), rotaslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PuzzleState {
    size: u8,
    tiles: Vec<Tile>,
    #[serde(skip)]
    cells: Vec<Option<TileId>>,
    empty: Position,
}

impl PuzzleState {
    /// Creates a solved board of the given size.
    ///
    /// Each tile starts in its home cell, upright, and the empty slot sits in
    /// the bottom-right corner.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero or larger than [`MAX_SIZE`].
    pub fn new(size: u8) -> Result<Self, BoardError> {
        check_size(size)?;
        let tile_count = tile_count(size);
        let tiles = (0..tile_count)
            .map(|i| {
                let id = tile_id(i);
                let home = id.home(size);
                Tile::new(id, home, home, Rotation::R0)
            })
            .collect::<Vec<_>>();
        let mut cells = tiles.iter().map(|tile| Some(tile.id())).collect::<Vec<_>>();
        cells.push(None);
        Ok(Self {
            size,
            tiles,
            cells,
            empty: Position::from_index(tile_count, size),
        })
    }

    /// Creates a board from each tile's position and rotation, listed by tile id.
    ///
    /// The empty slot is the one cell no tile occupies.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for an unsupported size,
    /// [`BoardError::TileCountMismatch`] unless exactly `size² - 1` placements
    /// are given, [`BoardError::OutOfBounds`] for a placement off the board, and
    /// [`BoardError::Overlap`] when two tiles share a cell.
    pub fn from_placements(
        size: u8,
        placements: &[(Position, Rotation)],
    ) -> Result<Self, BoardError> {
        check_size(size)?;
        let expected = tile_count(size);
        if placements.len() != expected {
            return Err(BoardError::TileCountMismatch {
                expected,
                actual: placements.len(),
            });
        }

        let mut cells = vec![None; expected + 1];
        let mut tiles = Vec::with_capacity(expected);
        for (i, &(position, rotation)) in placements.iter().enumerate() {
            let id = tile_id(i);
            if !position.is_within(size) {
                return Err(BoardError::OutOfBounds { id, position });
            }
            let cell = &mut cells[position.index(size)];
            if cell.is_some() {
                return Err(BoardError::Overlap { position });
            }
            *cell = Some(id);
            tiles.push(Tile::new(id, position, id.home(size), rotation));
        }

        // Exactly one cell is left over once the tile count and overlaps check out.
        let empty_index = cells.iter().position(Option::is_none).unwrap_or(expected);
        Ok(Self {
            size,
            tiles,
            cells,
            empty: Position::from_index(empty_index, size),
        })
    }

    /// Returns the board size `N`.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns all tiles, ordered by id.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile with the given id, if it exists on this board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Returns the tile occupying `pos`, or `None` for the empty slot or an off-board cell.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        if !pos.is_within(self.size) {
            return None;
        }
        let id = self.cells[pos.index(self.size)]?;
        self.tile(id)
    }

    /// Returns the position of the empty slot.
    #[must_use]
    pub fn empty(&self) -> Position {
        self.empty
    }

    /// Returns `true` if the tile is edge-adjacent to the empty slot.
    ///
    /// Unknown ids are never slidable.
    #[must_use]
    pub fn can_slide(&self, id: TileId) -> bool {
        self.tile(id)
            .is_some_and(|tile| tile.position().is_adjacent(self.empty))
    }

    /// Slides the tile into the empty slot.
    ///
    /// The tile and the empty slot swap cells. Returns `false` without changing
    /// anything if the tile is not adjacent to the empty slot.
    pub fn slide(&mut self, id: TileId) -> bool {
        if !self.can_slide(id) {
            return false;
        }
        let tile = &mut self.tiles[id.index()];
        let from = tile.position();
        tile.set_position(self.empty);
        self.cells[self.empty.index(self.size)] = Some(id);
        self.cells[from.index(self.size)] = None;
        self.empty = from;
        log::trace!("slid tile {id} from {from} to {}", tile.position());
        true
    }

    /// Turns the tile 90° clockwise in place.
    ///
    /// Any tile may rotate at any time. Returns `false` only for an id that is
    /// not on this board.
    pub fn rotate(&mut self, id: TileId) -> bool {
        let Some(tile) = self.tiles.get_mut(id.index()) else {
            return false;
        };
        tile.rotate();
        log::trace!("rotated tile {id} to {}", tile.rotation());
        true
    }

    /// Returns the tile that would move if the player pushed in `direction`.
    ///
    /// That is the tile on the far side of the empty slot: pushing up moves
    /// the tile below the slot, pushing right moves the tile to its left.
    #[must_use]
    pub fn tile_toward(&self, direction: Direction) -> Option<TileId> {
        let source = self.empty.neighbor(direction.opposite(), self.size)?;
        self.cells[source.index(self.size)]
    }

    /// Returns the tiles that can currently slide, in id order.
    #[must_use]
    pub fn slidable_tiles(&self) -> ArrayVec<[TileId; 4]> {
        let mut ids = Direction::ALL
            .into_iter()
            .filter_map(|dir| self.tile_toward(dir))
            .collect::<ArrayVec<[TileId; 4]>>();
        ids.sort_unstable();
        ids
    }

    /// Returns `true` if every tile is home and upright.
    ///
    /// The empty slot is then necessarily in the one cell no tile calls home.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// Returns the canonical key identifying this arrangement.
    #[must_use]
    pub fn state_key(&self) -> StateKey {
        let mut bytes = Vec::with_capacity(self.tiles.len() * 2);
        for tile in &self.tiles {
            bytes.push(cell_byte(tile.position(), self.size));
            bytes.push(tile.rotation().quarter_turns());
        }
        StateKey(bytes.into_boxed_slice())
    }
}

/// A canonical, compact serialization of every tile's cell and rotation.
///
/// Bytes come in pairs per tile, in id order: the row-major cell index
/// followed by the number of quarter turns. Two boards of the same size hold
/// the same arrangement exactly when their keys are equal.
///
/// # Examples
///
/// ```
/// use rotaslide_core::{PuzzleState, StateKey, TileId};
///
/// let mut state = PuzzleState::new(3)?;
/// assert_eq!(state.state_key(), StateKey::goal(3));
///
/// state.rotate(TileId::new(0));
/// assert_ne!(state.state_key(), StateKey::goal(3));
/// # Ok::<(), rotaslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    /// Returns the key of the solved board of the given size.
    ///
    /// Sizes beyond [`MAX_SIZE`] are not representable and yield the key of a
    /// board with no tiles.
    #[must_use]
    pub fn goal(size: u8) -> Self {
        if check_size(size).is_err() {
            return Self(Box::default());
        }
        let bytes = (0..tile_count(size))
            .flat_map(|i| [cell_byte(tile_id(i).home(size), size), 0])
            .collect();
        Self(bytes)
    }
}

fn check_size(size: u8) -> Result<(), BoardError> {
    if (1..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidSize { size })
    }
}

fn tile_count(size: u8) -> usize {
    usize::from(size) * usize::from(size) - 1
}

#[expect(clippy::cast_possible_truncation)]
fn tile_id(index: usize) -> TileId {
    TileId::new(index as u16)
}

#[expect(clippy::cast_possible_truncation)]
fn cell_byte(pos: Position, size: u8) -> u8 {
    pos.index(size) as u8
}
