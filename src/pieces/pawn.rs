/// Pawn move generation
/// The only piece whose peaceful geometry (straight pushes) differs from
/// its capture geometry (diagonal steps), and the only one whose direction
/// depends on its owner. En passant is generated here as a capture onto
/// the board's recorded target square; promotion is applied by the board
/// when the move lands on the last rank.
use crate::board::{Board, Piece, PieceKind, Player, Square};
use crate::pieces::offset_square;

pub struct PawnMoves;

impl PawnMoves {
    /// Forward pushes: one step, or two from the home row, onto empty squares.
    pub fn peaceful_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        let dir = piece.owner.forward();
        let mut moves = Vec::with_capacity(2);

        if let Some(one) = offset_square(from, dir, 0) {
            if board.get_piece(one).is_none() {
                moves.push(one);
                // The double step needs both squares clear
                if from.0 == piece.owner.pawn_home_row() {
                    if let Some(two) = offset_square(from, 2 * dir, 0) {
                        if board.get_piece(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Diagonal captures, including en passant onto the bypass square.
    pub fn capture_moves(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        let dir = piece.owner.forward();
        let mut moves = Vec::with_capacity(2);

        for dc in [-1i8, 1] {
            let Some(to) = offset_square(from, dir, dc) else {
                continue;
            };
            match board.get_piece(to) {
                Some(target) if target.owner != piece.owner => moves.push(to),
                Some(_) => {}
                None => {
                    // En passant: the bypassed enemy pawn stands beside us
                    if board.en_passant_target() == Some(to)
                        && Self::is_enemy_pawn(board, (from.0, to.1), piece.owner)
                    {
                        moves.push(to);
                    }
                }
            }
        }
        moves
    }

    /// The two capture diagonals, whatever stands on them. Forward pushes
    /// attack nothing.
    pub fn attack_squares(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get_piece(from) else {
            return Vec::new();
        };
        let dir = piece.owner.forward();
        [-1i8, 1]
            .iter()
            .filter_map(|&dc| offset_square(from, dir, dc))
            .collect()
    }

    fn is_enemy_pawn(board: &Board, square: Square, owner: Player) -> bool {
        matches!(
            board.get_piece(square),
            Some(Piece { kind: PieceKind::Pawn, owner: o }) if o != owner
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
