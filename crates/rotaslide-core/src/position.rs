//! Board coordinates and slide directions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by row and column.
///
/// Rows grow downward and columns grow to the right; `(0, 0)` is the top-left
/// cell.
///
/// # Examples
///
/// ```
/// use rotaslide_core::{Direction, Position};
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.neighbor(Direction::Up, 3), Some(Position::new(0, 1)));
/// assert_eq!(Position::new(0, 1).neighbor(Direction::Up, 3), None);
/// assert_eq!(pos.manhattan_distance(Position::new(2, 0)), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: u8,
    /// Column index, counted from the left.
    pub col: u8,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position from its row-major index on a board of `size` columns.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize, size: u8) -> Self {
        let size = size as usize;
        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }

    /// Returns the row-major index of this position on a board of `size` columns.
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Returns `true` if the position lies on a board of the given size.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }

    /// Returns `true` if the two positions share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the neighboring cell one step in `direction`, if it is on the board.
    #[must_use]
    pub fn neighbor(self, direction: Direction, size: u8) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }

    /// Rotates the position clockwise by `quarter_turns` quarter turns about the
    /// center of a board of the given size.
    #[must_use]
    pub fn rotated_clockwise(self, quarter_turns: u8, size: u8) -> Self {
        let last = size - 1;
        let mut pos = self;
        for _ in 0..quarter_turns % 4 {
            pos = Self::new(pos.col, last - pos.row);
        }
        pos
    }

    /// Rotates the position counterclockwise by `quarter_turns` quarter turns
    /// about the center of a board of the given size.
    #[must_use]
    pub fn rotated_counterclockwise(self, quarter_turns: u8, size: u8) -> Self {
        self.rotated_clockwise((4 - quarter_turns % 4) % 4, size)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The direction a tile travels when it slides into the empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All directions, in the order the solver expands them.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(row, col)` step for this direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the direction turned clockwise by `quarter_turns` quarter turns.
    #[must_use]
    pub const fn rotated_clockwise(self, quarter_turns: u8) -> Self {
        let mut dir = self;
        let mut i = 0;
        while i < quarter_turns % 4 {
            dir = match dir {
                Self::Up => Self::Right,
                Self::Right => Self::Down,
                Self::Down => Self::Left,
                Self::Left => Self::Up,
            };
            i += 1;
        }
        dir
    }

    /// Returns the direction turned counterclockwise by `quarter_turns` quarter turns.
    #[must_use]
    pub const fn rotated_counterclockwise(self, quarter_turns: u8) -> Self {
        self.rotated_clockwise((4 - quarter_turns % 4) % 4)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}
