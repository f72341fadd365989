//! Tiles and their stable identities.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Position, Rotation};

/// The stable identity of a tile.
///
/// A tile's id is the row-major index of its home cell, so on a board of size
/// `N` the ids run from `0` to `N² - 2` and the last cell is home to the empty
/// slot.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TileId(u16);

impl TileId {
    /// Creates a tile id from its raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns the id as a storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the home cell of this tile on a board of the given size.
    #[must_use]
    pub const fn home(self, size: u8) -> Position {
        Position::from_index(self.index(), size)
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile on the board.
///
/// The home cell is fixed when the tile is created; only the current position
/// and the rotation change during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    id: TileId,
    position: Position,
    home: Position,
    rotation: Rotation,
}

impl Tile {
    pub(crate) const fn new(
        id: TileId,
        position: Position,
        home: Position,
        rotation: Rotation,
    ) -> Self {
        Self {
            id,
            position,
            home,
            rotation,
        }
    }

    /// Returns the tile's id.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Returns the cell the tile currently occupies.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the cell the tile belongs in.
    #[must_use]
    pub const fn home(&self) -> Position {
        self.home
    }

    /// Returns the tile's current orientation.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns `true` if the tile sits in its home cell, upright.
    #[must_use]
    pub const fn is_home(&self) -> bool {
        self.position.row == self.home.row
            && self.position.col == self.home.col
            && self.rotation.is_upright()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn rotate(&mut self) {
        self.rotation = self.rotation.rotated();
    }
}
