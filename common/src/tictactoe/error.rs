use thiserror::Error;

use super::types::Player;

/// Rejections reported by the rules engine, the move selector and the
/// game session. All of them leave the game untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Cell index {0} is out of range 0..=8")]
    IndexOutOfRange(usize),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Not {0:?}'s turn")]
    NotYourTurn(Player),

    #[error("Game is already over")]
    GameOver,
}
