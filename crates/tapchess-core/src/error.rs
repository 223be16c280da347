//! Error types for the board core
//!
//! Move errors are recoverable by design of the input flow: the selection is
//! dropped and the board stays where it was.

use crate::pawn_gate::PawnRejection;
use crate::square::Square;

/// Why a move attempt did not change the board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The rules engine refused the move
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// The pawn policy refused the move before the engine was consulted
    #[error("pawn move {from}{to} rejected: {reason}")]
    PreFilterRejected {
        from: Square,
        to: Square,
        reason: PawnRejection,
    },

    /// Nothing stands on the origin square
    #[error("no piece on {0}")]
    EmptyOrigin(Square),
}

/// A position string could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("malformed FEN '{fen}': {message}")]
    Malformed { fen: String, message: String },

    #[error("FEN '{fen}' describes an impossible position: {message}")]
    Impossible { fen: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square '{0}'")]
pub struct ParseSquareError(pub String);

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;
