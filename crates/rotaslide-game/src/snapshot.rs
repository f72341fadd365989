use rotaslide_core::{Position, Rotation, Tile, TileId};
use serde::{Deserialize, Serialize};

use crate::{GameId, GameStatus, OptimalMoves, mode};

/// A tile as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    /// The tile's id.
    pub id: TileId,
    /// The tile's current cell on the board.
    pub position: Position,
    /// The cell the tile belongs in. Renderers use it to pick the image patch.
    pub home: Position,
    /// The tile's own rotation, not counting the board orientation.
    pub rotation: Rotation,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id(),
            position: tile.position(),
            home: tile.home(),
            rotation: tile.rotation(),
        }
    }
}

/// A read-only copy of everything needed to draw a game.
///
/// Positions are board coordinates. The `screen_*` helpers apply the board
/// orientation for renderers that draw the turned view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The game this snapshot was taken from.
    pub id: GameId,
    /// Board side length.
    pub size: u8,
    /// Tiles in id order.
    pub tiles: Vec<TileSnapshot>,
    /// The empty slot.
    pub empty: Position,
    /// Accepted moves so far.
    pub moves_taken: u32,
    /// Whether the game is still being played.
    pub status: GameStatus,
    /// How far the whole board is turned.
    pub orientation: Rotation,
    /// Best known move count for the starting board.
    pub optimal: OptimalMoves,
}

impl GameSnapshot {
    /// Returns the tile drawn at `screen` and its rotation on screen.
    ///
    /// Returns `None` for the empty slot or a cell off the board.
    #[must_use]
    pub fn screen_tile(&self, screen: Position) -> Option<(TileId, Rotation)> {
        if !screen.is_within(self.size) {
            return None;
        }
        let board = mode::board_position(screen, self.orientation, self.size);
        let tile = self.tiles.iter().find(|tile| tile.position == board)?;
        let turns = tile.rotation.quarter_turns() + self.orientation.quarter_turns();
        Some((tile.id, Rotation::from_quarter_turns(turns)))
    }

    /// Returns where the empty slot is drawn.
    #[must_use]
    pub fn screen_empty(&self) -> Position {
        mode::screen_position(self.empty, self.orientation, self.size)
    }
}
