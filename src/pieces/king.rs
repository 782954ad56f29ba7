/// King move generation: one step in any of the eight directions, plus
/// castling expressed as a two-file king move.
use crate::board::{Board, Piece, PieceKind, Player, Square};
use crate::pieces::{jump_attacks, jump_captures, jump_peaceful, ALL_DIRECTIONS};

pub struct KingMoves;

impl KingMoves {
    pub fn peaceful_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        let mut moves = jump_peaceful(board, from, &ALL_DIRECTIONS);
        moves.extend(Self::castling_moves(board, from, piece.owner));
        moves
    }

    pub fn capture_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        jump_captures(board, from, &ALL_DIRECTIONS, piece.owner)
    }

    /// The eight adjacent squares. Castling never attacks anything.
    pub fn attack_squares(_board: &Board, from: Square) -> Vec<Square> {
        jump_attacks(from, &ALL_DIRECTIONS)
    }

    /// Castling preconditions checked here: rights intact, the rook still
    /// home, the transit files empty, the king neither in check now nor
    /// crossing an attacked square. Safety of the landing square is the
    /// ordinary legality filter's job.
    fn castling_moves(board: &Board, from: Square, owner: Player) -> Vec<Square> {
        let row = owner.back_row();
        let mut moves = Vec::new();

        if from != (row, 4) || board.is_in_check(owner) {
            return moves;
        }
        let enemy = owner.opposite();

        if board.castling_rights().king_side(owner)
            && Self::own_rook_at(board, (row, 7), owner)
            && board.get_piece((row, 5)).is_none()
            && board.get_piece((row, 6)).is_none()
            && !board.is_square_attacked((row, 5), enemy)
        {
            moves.push((row, 6));
        }

        if board.castling_rights().queen_side(owner)
            && Self::own_rook_at(board, (row, 0), owner)
            && board.get_piece((row, 1)).is_none()
            && board.get_piece((row, 2)).is_none()
            && board.get_piece((row, 3)).is_none()
            && !board.is_square_attacked((row, 3), enemy)
        {
            moves.push((row, 2));
        }

        moves
    }

    fn own_rook_at(board: &Board, square: Square, owner: Player) -> bool {
        matches!(
            board.get_piece(square),
            Some(Piece { kind: PieceKind::Rook, owner: o }) if o == owner
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
