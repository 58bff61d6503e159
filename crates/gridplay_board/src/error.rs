//! Error types for board access and move validation.

use crate::Coord;

/// Error returned when a coordinate does not address a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The coordinate lies outside the grid.
    #[display("Cell {} is outside the {}x{} board", coord, width, height)]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },
}

/// Reason a click did not become a move.
///
/// Rejections never change game state; listeners log them and move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejected {
    /// The game has not been started.
    #[display("Game has not started")]
    NotStarted,

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Coord),

    /// Every cell of the target column holds a mark.
    #[display("Column {} is full", _0)]
    ColumnFull(#[error(not(source))] usize),

    /// The target is not on the board.
    #[display("Cell {} is not on the board", _0)]
    OutOfBounds(#[error(not(source))] Coord),
}

impl From<BoardError> for MoveRejected {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { coord, .. } => MoveRejected::OutOfBounds(coord),
        }
    }
}
