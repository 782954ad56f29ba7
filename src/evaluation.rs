// Position evaluation: flat material-and-placement scoring
// Pure over a board snapshot; an external search/AI layer calls this to
// rank candidate positions. Terminal states are that layer's business,
// not the evaluator's.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PieceKind, Player, Square};

/// Material weights in centipawns, loadable from TOML for tuning runs.
/// The king carries no material weight; losing it ends the game instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
        }
    }
}

impl EvalWeights {
    /// Parse weights from a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    fn value_of(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => 0,
        }
    }
}

/// Piece-Square Table for pawns, white-oriented (row 0 = rank 8).
/// Advanced pawns score up, the home-square shuffle scores down.
const PAWN_PST: [[i32; 8]; 8] = [
    [ 0,   0,   0,   0,   0,   0,   0,  0],
    [50,  50,  50,  50,  50,  50,  50, 50],
    [10,  10,  20,  30,  30,  20,  10, 10],
    [ 5,   5,  10,  25,  25,  10,   5,  5],
    [ 0,   0,   0,  20,  20,   0,   0,  0],
    [ 5,  -5, -10,   0,   0, -10,  -5,  5],
    [ 5,  10,  10, -20, -20,  10,  10,  5],
    [ 0,   0,   0,   0,   0,   0,   0,  0],
];

/// Piece-Square Table for knights: centralization is everything.
const KNIGHT_PST: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Positional bonus for a piece standing on `square`. Tables are stored
/// from white's point of view and row-mirrored for black, which keeps the
/// whole evaluation antisymmetric between the two perspectives.
fn positional_bonus(kind: PieceKind, owner: Player, square: Square) -> i32 {
    let (row, col) = square;
    let oriented_row = match owner {
        Player::White => row,
        Player::Black => 7 - row,
    } as usize;
    match kind {
        PieceKind::Pawn => PAWN_PST[oriented_row][col as usize],
        PieceKind::Knight => KNIGHT_PST[oriented_row][col as usize],
        _ => 0,
    }
}

/// Evaluate the position from the perspective of the given player using
/// the default weights. Positive is good for `perspective`, negative is
/// bad; an empty board is exactly 0 for either perspective.
pub fn evaluate_board(board: &Board, perspective: Player) -> i32 {
    evaluate_board_with(board, perspective, &EvalWeights::default())
}

/// Same as [`evaluate_board`] with explicit material weights.
pub fn evaluate_board_with(board: &Board, perspective: Player, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    for row in 0..8 {
        for col in 0..8 {
            if let Some(piece) = board.get_piece((row, col)) {
                let value =
                    weights.value_of(piece.kind) + positional_bonus(piece.kind, piece.owner, (row, col));
                if piece.owner == perspective {
                    score += value;
                } else {
                    score -= value;
                }
            }
        }
    }
    score
}

// =============================================================================
// Unit Tests
// =============================================================================
