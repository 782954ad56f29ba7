/// Bishop move generation
/// Slides along the four diagonals
use crate::board::{Board, Square};
use crate::pieces::{sliding_attacks, sliding_captures, sliding_peaceful, DIAGONAL_DIRECTIONS};

pub struct BishopMoves;

impl BishopMoves {
    pub fn peaceful_moves(board: &Board, from: Square) -> Vec<Square> {
        if board.get_piece(from).is_none() {
            return Vec::new();
        }
        sliding_peaceful(board, from, &DIAGONAL_DIRECTIONS)
    }

    pub fn capture_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        sliding_captures(board, from, &DIAGONAL_DIRECTIONS, piece.owner)
    }

    pub fn attack_squares(board: &Board, from: Square) -> Vec<Square> {
        sliding_attacks(board, from, &DIAGONAL_DIRECTIONS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Player};

    #[test]
    fn test_bishop_on_empty_board_center() {
        let mut board = Board::new();
        // Bishop on d4 (row 4, col 3)
        board.set_piece((4, 3), Some(Piece::new(PieceKind::Bishop, Player::White)));

        let moves = BishopMoves::peaceful_moves(&board, (4, 3));

        // 13 diagonal squares are reachable from d4
        assert_eq!(moves.len(), 13, "Bishop should have 13 moves from d4");
        assert!(moves.contains(&(0, 7)), "Long diagonal to h8");
        assert!(moves.contains(&(7, 0)), "Long diagonal to a1");
        assert!(!moves.contains(&(4, 0)), "Bishop should not move orthogonally");
    }

    #[test]
    fn test_bishop_corner() {
        let mut board = Board::new();
        board.set_piece((0, 0), Some(Piece::new(PieceKind::Bishop, Player::White)));

        let moves = BishopMoves::peaceful_moves(&board, (0, 0));

        // Only the single long diagonal leaves a corner
        assert_eq!(moves.len(), 7, "Bishop should have 7 moves from a corner");
    }

    #[test]
    fn test_bishop_blocked_and_capturing() {
        let mut board = Board::new();
        board.set_piece((4, 3), Some(Piece::new(PieceKind::Bishop, Player::White)));
        // Own pawn up-left, enemy pawn up-right
        board.set_piece((3, 2), Some(Piece::new(PieceKind::Pawn, Player::White)));
        board.set_piece((2, 5), Some(Piece::new(PieceKind::Pawn, Player::Black)));

        let peaceful = BishopMoves::peaceful_moves(&board, (4, 3));
        let takes = BishopMoves::capture_moves(&board, (4, 3));

        assert!(!peaceful.contains(&(3, 2)), "Own piece blocks the ray");
        assert!(!peaceful.contains(&(2, 1)), "No sliding through own piece");
        assert!(peaceful.contains(&(3, 4)), "Square before the enemy is open");
        assert!(takes.contains(&(2, 5)), "Enemy pawn can be captured");
        assert!(!takes.contains(&(1, 6)), "No capturing behind the enemy");
    }
}
