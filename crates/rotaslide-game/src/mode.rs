use std::{
    fmt::{self, Display},
    num::NonZeroU32,
};

use rotaslide_core::{Direction, Position, Rotation};
use serde::{Deserialize, Serialize};

/// How a game is played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// The board stays put.
    #[default]
    Classic,
    /// The whole board turns 90° clockwise every `interval` accepted moves.
    ///
    /// Only the view turns: tiles keep their board positions and rotations,
    /// while the player's directions and cell coordinates are read against the
    /// turned view.
    Twist {
        /// Accepted moves between board turns.
        interval: NonZeroU32,
    },
}

impl GameMode {
    /// Returns the board orientation after `moves_taken` accepted moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroU32;
    ///
    /// use rotaslide_core::Rotation;
    /// use rotaslide_game::GameMode;
    ///
    /// let twist = GameMode::Twist { interval: NonZeroU32::new(3).unwrap() };
    /// assert_eq!(twist.orientation_after(2), Rotation::R0);
    /// assert_eq!(twist.orientation_after(3), Rotation::R90);
    /// assert_eq!(twist.orientation_after(12), Rotation::R0);
    /// assert_eq!(GameMode::Classic.orientation_after(12), Rotation::R0);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn orientation_after(self, moves_taken: u32) -> Rotation {
        match self {
            Self::Classic => Rotation::R0,
            Self::Twist { interval } => {
                let turns = (moves_taken / interval.get()) % 4;
                Rotation::from_quarter_turns(turns as u8)
            }
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => f.write_str("classic"),
            Self::Twist { interval } => write!(f, "twist every {interval}"),
        }
    }
}

/// Maps a direction seen on screen to the direction on the board.
pub(crate) fn board_direction(screen: Direction, orientation: Rotation) -> Direction {
    screen.rotated_counterclockwise(orientation.quarter_turns())
}

/// Maps a cell seen on screen to the cell on the board.
pub(crate) fn board_position(screen: Position, orientation: Rotation, size: u8) -> Position {
    screen.rotated_counterclockwise(orientation.quarter_turns(), size)
}

/// Maps a board cell to where it is drawn on screen.
pub(crate) fn screen_position(board: Position, orientation: Rotation, size: u8) -> Position {
    board.rotated_clockwise(orientation.quarter_turns(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_maps_screen_up_to_board_left() {
        // Turned 90° clockwise, the board's left edge faces up on screen.
        assert_eq!(board_direction(Direction::Up, Rotation::R90), Direction::Left);
        assert_eq!(board_direction(Direction::Right, Rotation::R90), Direction::Up);
        assert_eq!(board_direction(Direction::Down, Rotation::R180), Direction::Up);
        assert_eq!(board_direction(Direction::Left, Rotation::R0), Direction::Left);
    }

    #[test]
    fn test_screen_and_board_positions_are_inverse() {
        for rotation in Rotation::ALL {
            for index in 0..16 {
                let board = Position::from_index(index, 4);
                let screen = screen_position(board, rotation, 4);
                assert!(screen.is_within(4));
                assert_eq!(board_position(screen, rotation, 4), board);
            }
        }
    }

    #[test]
    fn test_quarter_turn_moves_top_left_to_top_right() {
        let screen = screen_position(Position::new(0, 0), Rotation::R90, 3);
        assert_eq!(screen, Position::new(0, 2));
    }
}
