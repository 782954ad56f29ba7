/// Knight move generation
/// The one piece kind that jumps: intervening occupancy never matters,
/// each of the eight offsets is bounds-checked independently.
use crate::board::{Board, Square};
use crate::pieces::{jump_attacks, jump_captures, jump_peaceful, KNIGHT_OFFSETS};

pub struct KnightMoves;

impl KnightMoves {
    pub fn peaceful_moves(board: &Board, from: Square) -> Vec<Square> {
        if board.get_piece(from).is_none() {
            return Vec::new();
        }
        jump_peaceful(board, from, &KNIGHT_OFFSETS)
    }

    pub fn capture_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        jump_captures(board, from, &KNIGHT_OFFSETS, piece.owner)
    }

    pub fn attack_squares(_board: &Board, from: Square) -> Vec<Square> {
        jump_attacks(from, &KNIGHT_OFFSETS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Player};

    fn lone_knight_moves(square: Square) -> usize {
        let mut board = Board::new();
        board.set_piece(square, Some(Piece::new(PieceKind::Knight, Player::White)));
        KnightMoves::peaceful_moves(&board, square).len()
    }

    #[test]
    fn test_knight_mobility_table() {
        // Standard knight mobility counts
        assert_eq!(lone_knight_moves((4, 4)), 8, "central square");
        assert_eq!(lone_knight_moves((0, 0)), 2, "corner");
        assert_eq!(lone_knight_moves((7, 7)), 2, "corner");
        assert_eq!(lone_knight_moves((0, 1)), 3, "edge next to corner");
        assert_eq!(lone_knight_moves((0, 2)), 4, "edge");
        assert_eq!(lone_knight_moves((0, 4)), 4, "edge");
        assert_eq!(lone_knight_moves((1, 1)), 4, "second ring near corner");
        assert_eq!(lone_knight_moves((2, 2)), 8, "two squares off both edges");
    }

    #[test]
    fn test_knight_moves_center_squares() {
        let mut board = Board::new();
        board.set_piece((3, 4), Some(Piece::new(PieceKind::Knight, Player::White)));

        let moves = KnightMoves::peaceful_moves(&board, (3, 4));

        let expected = [
            (1, 3), (1, 5), (2, 2), (2, 6),
            (4, 2), (4, 6), (5, 3), (5, 5),
        ];
        assert_eq!(moves.len(), expected.len());
        for square in expected {
            assert!(moves.contains(&square), "expected knight move to {:?}", square);
        }
    }

    #[test]
    fn test_knight_on_standard_board_splits_moves() {
        // White knight dropped two rows in front of the black camp: the
        // jumps into the black ranks are takes, the rest are peaceful.
        let mut board = Board::starting_position();
        board.set_piece((2, 3), Some(Piece::new(PieceKind::Knight, Player::White)));

        let takes = KnightMoves::capture_moves(&board, (2, 3));
        let peaceful = KnightMoves::peaceful_moves(&board, (2, 3));

        let expected_takes = [(0, 2), (0, 4), (1, 1), (1, 5)];
        assert_eq!(takes.len(), expected_takes.len());
        for square in expected_takes {
            assert!(takes.contains(&square), "expected take on {:?}", square);
        }

        let expected_peaceful = [(3, 1), (3, 5), (4, 2), (4, 4)];
        assert_eq!(peaceful.len(), expected_peaceful.len());
        for square in expected_peaceful {
            assert!(peaceful.contains(&square), "expected peaceful move to {:?}", square);
        }

        // The two sets never overlap
        for square in &takes {
            assert!(!peaceful.contains(square), "{:?} is in both sets", square);
        }
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut board = Board::new();
        board.set_piece((4, 4), Some(Piece::new(PieceKind::Knight, Player::White)));
        // Wall the knight in completely; the jumps remain
        for dr in -1i8..=1 {
            for dc in -1i8..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let square = ((4 + dr) as u8, (4 + dc) as u8);
                board.set_piece(square, Some(Piece::new(PieceKind::Pawn, Player::White)));
            }
        }

        let moves = KnightMoves::peaceful_moves(&board, (4, 4));
        assert_eq!(moves.len(), 8, "Adjacent pieces never block a knight");
    }

    #[test]
    fn test_knight_no_piece_returns_empty() {
        let board = Board::new();
        assert!(KnightMoves::peaceful_moves(&board, (4, 4)).is_empty());
        assert!(KnightMoves::capture_moves(&board, (4, 4)).is_empty());
    }
}
