//! Line commands typed by the player.

use std::str::FromStr;

use rotaslide_core::{Direction, Position};

/// One player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Push a tile into the empty slot, in screen directions.
    Slide(Direction),
    /// Turn the tile at a screen cell.
    Rotate(Position),
    /// Show the next move of a shortest solution.
    Hint,
    /// Abandon the current game and start another.
    NewGame,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Errors raised when reading a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandParseError {
    /// The line was blank.
    #[display("no command given")]
    Empty,
    /// The first word is not a command.
    #[display("unknown command `{command}`")]
    UnknownCommand {
        /// The word typed.
        command: String,
    },
    /// `r` needs a row and a column.
    #[display("rotate needs a row and a column, as in `r 0 2`")]
    MissingCoordinate,
    /// A coordinate is not a small non-negative number.
    #[display("invalid coordinate `{token}`")]
    InvalidCoordinate {
        /// The token that failed to parse.
        token: String,
    },
    /// Extra words after a complete command.
    #[display("unexpected `{token}` after command")]
    TrailingInput {
        /// The first extra token.
        token: String,
    },
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandParseError::Empty)?;
        let command = match head.to_ascii_lowercase().as_str() {
            "w" | "up" => Self::Slide(Direction::Up),
            "s" | "down" => Self::Slide(Direction::Down),
            "a" | "left" => Self::Slide(Direction::Left),
            "d" | "right" => Self::Slide(Direction::Right),
            "r" | "rotate" => {
                let row = parse_coordinate(words.next())?;
                let col = parse_coordinate(words.next())?;
                Self::Rotate(Position::new(row, col))
            }
            "h" | "hint" => Self::Hint,
            "n" | "new" => Self::NewGame,
            "?" | "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            _ => {
                return Err(CommandParseError::UnknownCommand {
                    command: head.to_owned(),
                });
            }
        };
        if let Some(token) = words.next() {
            return Err(CommandParseError::TrailingInput {
                token: token.to_owned(),
            });
        }
        Ok(command)
    }
}

fn parse_coordinate(token: Option<&str>) -> Result<u8, CommandParseError> {
    let token = token.ok_or(CommandParseError::MissingCoordinate)?;
    token
        .parse()
        .map_err(|_| CommandParseError::InvalidCoordinate {
            token: token.to_owned(),
        })
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  w / up       push a tile up into the empty slot
  s / down     push a tile down
  a / left     push a tile left
  d / right    push a tile right
  r ROW COL    turn the tile at ROW, COL by 90°
  h            show a hint
  n            start a new game
  ?            show this help
  q            quit";
