//! Distance estimate used to order the search.

use rotaslide_core::{PuzzleState, Tile};

/// Estimates the moves left to solve `state`.
///
/// Sums, over all tiles, the Manhattan distance from the tile's cell to its
/// home plus one if the tile is turned. A slide changes one tile's distance by
/// one and a rotation changes at most one turned flag, so the estimate never
/// drops by more than the cost of a move.
///
/// # Examples
///
/// ```
/// use rotaslide_core::PuzzleState;
/// use rotaslide_solver::estimate;
///
/// let state: PuzzleState = "0 1 2 / 3 4 5 / 6:90 _ 7".parse()?;
/// // Tile 7 is one cell from home and tile 6 is turned.
/// assert_eq!(estimate(&state), 2);
/// # Ok::<(), rotaslide_core::ParseBoardError>(())
/// ```
#[must_use]
pub fn estimate(state: &PuzzleState) -> u32 {
    state.tiles().iter().map(tile_estimate).sum()
}

fn tile_estimate(tile: &Tile) -> u32 {
    let distance = tile.position().manhattan_distance(tile.home());
    let turned = u32::from(!tile.rotation().is_upright());
    distance + turned
}

#[cfg(test)]
mod tests {
    use rotaslide_core::TileId;

    use super::*;

    #[test]
    fn test_solved_board_estimates_zero() {
        assert_eq!(estimate(&PuzzleState::new(4).unwrap()), 0);
    }

    #[test]
    fn test_rotation_counts_once_regardless_of_angle() {
        let mut state = PuzzleState::new(3).unwrap();
        let id = TileId::new(2);
        for _ in 0..3 {
            state.rotate(id);
            assert_eq!(estimate(&state), 1);
        }
        state.rotate(id);
        assert_eq!(estimate(&state), 0);
    }

    #[test]
    fn test_distance_sums_over_tiles() {
        let state: PuzzleState = "_ 0 1 / 2 3 4 / 5 6 7".parse().unwrap();
        // Every tile is one cell right of home except 2 and 5, which wrapped
        // to the start of the next row.
        let expected = [1, 1, 3, 1, 1, 3, 1, 1];
        assert_eq!(estimate(&state), expected.iter().sum::<u32>());
    }
}
