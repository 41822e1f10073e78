//! Move rejection reasons.

use super::Cell;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// A winner (or a declared draw) already ended the game.
    #[display("Game is already over")]
    GameOver,
}
