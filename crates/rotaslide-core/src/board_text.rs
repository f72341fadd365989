//! Plain-text board format.
//!
//! Rows are separated by newlines or `/`, cells by whitespace. The empty slot
//! is written `_` and a tile as its id, optionally followed by `:90`, `:180`
//! or `:270` when it is turned.
//!
//! ```text
//! 0 1 2
//! 3 4:90 5
//! 6 _ 7
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoardError, MAX_SIZE, Position, PuzzleState, Rotation, TileId};

/// Errors raised when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseBoardError {
    /// The input contains no rows.
    #[display("board text is empty")]
    Empty,
    /// A row does not have as many cells as there are rows.
    #[display("row {row} has {cells} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Cells found in the row.
        cells: usize,
        /// Cells expected per row.
        expected: usize,
    },
    /// A cell token is neither `_` nor a tile id.
    #[display("invalid cell {token:?}")]
    InvalidCell {
        /// The offending token.
        token: String,
    },
    /// A rotation suffix is not one of 0, 90, 180 or 270.
    #[display("invalid rotation in cell {token:?}")]
    InvalidRotation {
        /// The offending token.
        token: String,
    },
    /// A tile id is out of range for the board size.
    #[display("tile {id} does not exist on this board")]
    UnknownTile {
        /// The out-of-range id.
        id: TileId,
    },
    /// A tile id appears more than once.
    #[display("tile {id} appears more than once")]
    DuplicateTile {
        /// The repeated id.
        id: TileId,
    },
    /// The board does not contain exactly one empty slot.
    #[display("expected exactly one empty slot, found {count}")]
    EmptySlotCount {
        /// Empty slots found.
        count: usize,
    },
    /// The tile layout is not a valid board.
    #[display("{_0}")]
    #[from]
    Board(#[error(source)] BoardError),
}

impl FromStr for PuzzleState {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| row.split_whitespace().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let expected = rows.len();
        let size = u8::try_from(expected)
            .ok()
            .filter(|size| *size <= MAX_SIZE)
            .ok_or(BoardError::InvalidSize {
                size: u8::try_from(expected).unwrap_or(u8::MAX),
            })?;

        let tile_count = expected * expected - 1;
        let mut placements = vec![None; tile_count];
        let mut empty_count = 0;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ParseBoardError::NotSquare {
                    row: r,
                    cells: row.len(),
                    expected,
                });
            }
            for (c, token) in row.iter().enumerate() {
                if *token == "_" {
                    empty_count += 1;
                    continue;
                }
                let (id, rotation) = parse_tile(token)?;
                let slot = placements
                    .get_mut(id.index())
                    .ok_or(ParseBoardError::UnknownTile { id })?;
                if slot.is_some() {
                    return Err(ParseBoardError::DuplicateTile { id });
                }
                #[expect(clippy::cast_possible_truncation)]
                let position = Position::new(r as u8, c as u8);
                *slot = Some((position, rotation));
            }
        }
        if empty_count != 1 {
            return Err(ParseBoardError::EmptySlotCount { count: empty_count });
        }

        // One empty slot and no duplicates among N² - 1 tile cells means every id is present.
        let placements = placements.into_iter().flatten().collect::<Vec<_>>();
        Ok(Self::from_placements(size, &placements)?)
    }
}

fn parse_tile(token: &str) -> Result<(TileId, Rotation), ParseBoardError> {
    let (id, rotation) = match token.split_once(':') {
        Some((id, degrees)) => {
            let rotation = degrees
                .parse()
                .ok()
                .and_then(Rotation::from_degrees)
                .ok_or_else(|| ParseBoardError::InvalidRotation {
                    token: token.to_owned(),
                })?;
            (id, rotation)
        }
        None => (token, Rotation::R0),
    };
    let id = id.parse().map_err(|_| ParseBoardError::InvalidCell {
        token: token.to_owned(),
    })?;
    Ok((TileId::new(id), rotation))
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let cells = (0..usize::from(size) * usize::from(size))
            .map(|index| {
                let pos = Position::from_index(index, size);
                match self.tile_at(pos) {
                    None => "_".to_owned(),
                    Some(tile) if tile.rotation().is_upright() => tile.id().to_string(),
                    Some(tile) => format!("{}:{}", tile.id(), tile.rotation().degrees()),
                }
            })
            .collect::<Vec<_>>();
        let width = cells.iter().map(String::len).max().unwrap_or(1);

        for (row, chunk) in cells.chunks(usize::from(size)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if col + 1 == chunk.len() {
                    f.write_str(cell)?;
                } else {
                    write!(f, "{cell:<width$}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solved_board() {
        let state: PuzzleState = "0 1 2 / 3 4 5 / 6 7 _".parse().unwrap();
        assert_eq!(state, PuzzleState::new(3).unwrap());
    }

    #[test]
    fn test_parse_rotations_and_layout() {
        let state: PuzzleState = "
            0 1 2
            3 4:90 5
            6 _ 7:270
        "
        .parse()
        .unwrap();
        assert_eq!(state.empty(), Position::new(2, 1));
        let tile = state.tile(TileId::new(4)).unwrap();
        assert_eq!(tile.rotation(), Rotation::R90);
        let tile = state.tile(TileId::new(7)).unwrap();
        assert_eq!(tile.position(), Position::new(2, 2));
        assert_eq!(tile.rotation(), Rotation::R270);
    }

    #[test]
    fn test_display_round_trips() {
        let text = "0    1    2\n3    4    5\n6:90 _    7";
        let state: PuzzleState = text.parse().unwrap();
        assert_eq!(state.to_string(), text);
        assert_eq!(state.to_string().parse::<PuzzleState>().unwrap(), state);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<PuzzleState>(), Err(ParseBoardError::Empty));
        assert_eq!(
            "0 1 / 2".parse::<PuzzleState>(),
            Err(ParseBoardError::NotSquare {
                row: 1,
                cells: 1,
                expected: 2
            })
        );
        assert_eq!(
            "0 x / 2 _".parse::<PuzzleState>(),
            Err(ParseBoardError::InvalidCell {
                token: "x".to_owned()
            })
        );
        assert_eq!(
            "0 1:45 / 2 _".parse::<PuzzleState>(),
            Err(ParseBoardError::InvalidRotation {
                token: "1:45".to_owned()
            })
        );
        assert_eq!(
            "0 1 / 7 _".parse::<PuzzleState>(),
            Err(ParseBoardError::UnknownTile { id: TileId::new(7) })
        );
        assert_eq!(
            "0 0 / 1 _".parse::<PuzzleState>(),
            Err(ParseBoardError::DuplicateTile { id: TileId::new(0) })
        );
        assert_eq!(
            "0 _ / 1 _".parse::<PuzzleState>(),
            Err(ParseBoardError::EmptySlotCount { count: 2 })
        );
    }
}
