/// Rook move generation
/// Slides horizontally and vertically (orthogonally)
use crate::board::{Board, Square};
use crate::pieces::{sliding_attacks, sliding_captures, sliding_peaceful, ORTHOGONAL_DIRECTIONS};

pub struct RookMoves;

impl RookMoves {
    /// Empty destinations along the four orthogonal rays.
    pub fn peaceful_moves(board: &Board, from: Square) -> Vec<Square> {
        if board.get_piece(from).is_none() {
            return Vec::new(); // No piece at 'from', return empty
        }
        sliding_peaceful(board, from, &ORTHOGONAL_DIRECTIONS)
    }

    /// Enemy-occupied destinations: the first blocker on each ray, when hostile.
    pub fn capture_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        sliding_captures(board, from, &ORTHOGONAL_DIRECTIONS, piece.owner)
    }

    /// Squares the rook attacks, first blocker included whoever owns it.
    pub fn attack_squares(board: &Board, from: Square) -> Vec<Square> {
        sliding_attacks(board, from, &ORTHOGONAL_DIRECTIONS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
