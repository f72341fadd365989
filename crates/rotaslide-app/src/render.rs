//! Plain-text drawing of a game.

use std::fmt::Write as _;

use rotaslide_core::{Position, Rotation};
use rotaslide_game::{GameMode, GameSnapshot};

/// Draws the board as the player sees it, with row and column numbers.
///
/// Tiles show their id and an arrow pointing where the tile's top edge faces;
/// in twist mode both the layout and the arrows include the board turn.
#[must_use]
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let width = cell_width(snapshot);
    let mut out = String::new();

    let _ = write!(out, "   ");
    for col in 0..snapshot.size {
        let _ = write!(out, " {col:>width$}");
    }
    out.push('\n');

    for row in 0..snapshot.size {
        let _ = write!(out, "{row:>2} ");
        for col in 0..snapshot.size {
            let cell = match snapshot.screen_tile(Position::new(row, col)) {
                Some((id, rotation)) => format!("{id}{}", arrow(rotation)),
                None => "·".to_owned(),
            };
            let _ = write!(out, " {cell:>width$}");
        }
        out.push('\n');
    }
    out
}

/// Draws the status line shown under the board.
#[must_use]
pub fn render_status(snapshot: &GameSnapshot, mode: GameMode) -> String {
    let mut line = format!(
        "game {}  moves: {}  optimal: {}",
        snapshot.id, snapshot.moves_taken, snapshot.optimal
    );
    if let GameMode::Twist { interval } = mode {
        let _ = write!(
            line,
            "  board turned {} (turns every {interval})",
            snapshot.orientation
        );
    }
    line
}

fn arrow(rotation: Rotation) -> char {
    match rotation {
        Rotation::R0 => '↑',
        Rotation::R90 => '→',
        Rotation::R180 => '↓',
        Rotation::R270 => '←',
    }
}

fn cell_width(snapshot: &GameSnapshot) -> usize {
    let largest = snapshot.tiles.iter().map(|tile| tile.id.get()).max().unwrap_or(0);
    largest.to_string().len() + 1
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rotaslide_game::{Game, GameId};

    use super::*;

    fn snapshot(board: &str, mode: GameMode) -> GameSnapshot {
        Game::new(GameId::new(3), board.parse().unwrap(), mode).snapshot()
    }

    #[test]
    fn test_board_marks_rotation_and_empty_slot() {
        let text = render_board(&snapshot("0 1 2 / 3 4 5 / 6 _ 7:90", GameMode::Classic));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "     0  1  2");
        assert_eq!(lines[1], " 0  0↑ 1↑ 2↑");
        assert_eq!(lines[3], " 2  6↑  · 7→");
    }

    #[test]
    fn test_status_shows_computing_until_solved() {
        let snapshot = snapshot("0 1 2 / 3 4 5 / 6 _ 7", GameMode::Classic);
        let status = render_status(&snapshot, GameMode::Classic);
        assert_eq!(status, "game #3  moves: 0  optimal: computing…");
    }

    #[test]
    fn test_status_mentions_twist() {
        let mode = GameMode::Twist {
            interval: NonZeroU32::new(4).unwrap(),
        };
        let status = render_status(&snapshot("0 1 2 / 3 4 5 / 6 _ 7", mode), mode);
        assert!(status.ends_with("board turned 0° (turns every 4)"));
    }
}
