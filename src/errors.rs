// Error types for the engine boundary
// Geometry and bounds problems are absorbed inside move generation and
// never surface; only the move-application API reports errors.

use thiserror::Error;

use crate::board::Square;

/// Domain errors raised by [`crate::board::Board::move_piece`].
///
/// None of these are fatal to the engine. The expected remedy is for the
/// caller to pick another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A coordinate outside the 8x8 board reached the public API.
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The source square holds no piece.
    #[error("no piece to move on square ({row}, {col})")]
    EmptySource { row: u8, col: u8 },

    /// Legality validation only: the piece belongs to the side not to move.
    #[error("the piece on ({row}, {col}) does not belong to the side to move")]
    NotYourTurn { row: u8, col: u8 },

    /// Legality validation only: the destination is not in the mover's
    /// legal move set (either unreachable or it would expose the king).
    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Square, to: Square },
}

// =============================================================================
// Unit Tests
// =============================================================================
