/// Reasons a move attempt is rejected.
///
/// A rejected attempt leaves the game untouched: the board, the move count and
/// the board orientation are all unchanged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum MoveBlockReason {
    /// The game is already won.
    #[display("the game is over")]
    GameOver,
    /// No tile sits next to the empty slot on the side the push comes from.
    #[display("no tile can slide that way")]
    NoTileToSlide,
    /// The chosen cell is the empty slot.
    #[display("that cell is empty")]
    EmptyCell,
    /// The chosen cell is off the board.
    #[display("that cell is off the board")]
    OutOfBounds,
}
