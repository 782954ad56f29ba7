/// Queen move generation
/// Combines the rook and bishop rays: slides in all eight directions
use crate::board::{Board, Square};
use crate::pieces::{sliding_attacks, sliding_captures, sliding_peaceful, ALL_DIRECTIONS};

pub struct QueenMoves;

impl QueenMoves {
    pub fn peaceful_moves(board: &Board, from: Square) -> Vec<Square> {
        if board.get_piece(from).is_none() {
            return Vec::new();
        }
        sliding_peaceful(board, from, &ALL_DIRECTIONS)
    }

    pub fn capture_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        sliding_captures(board, from, &ALL_DIRECTIONS, piece.owner)
    }

    pub fn attack_squares(board: &Board, from: Square) -> Vec<Square> {
        sliding_attacks(board, from, &ALL_DIRECTIONS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
