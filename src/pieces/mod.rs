// Per-piece move generation
// One module per piece kind; the shared ray and jump helpers live here so
// every kind applies the same bounds and blocking discipline.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use crate::board::{Board, Player, Square};

/// Orthogonal ray directions (the rook component).
pub(crate) const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions (the bishop component).
pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight directions: queen rays, king steps.
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Knight jump offsets: (±1, ±2) and (±2, ±1).
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    ( 1, -2), ( 1, 2), ( 2, -1), ( 2, 1),
];

/// Offset `from` by (dr, dc); None when the result leaves the board.
pub(crate) fn offset_square(from: Square, dr: i8, dc: i8) -> Option<Square> {
    let row = from.0 as i8 + dr;
    let col = from.1 as i8 + dc;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8, col as u8))
    } else {
        None
    }
}

/// Empty squares along each ray, stopping before the first occupied cell.
pub(crate) fn sliding_peaceful(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut distance = 1;
        while let Some(to) = offset_square(from, dr * distance, dc * distance) {
            if board.get_piece(to).is_some() {
                break;
            }
            moves.push(to);
            distance += 1;
        }
    }
    moves
}

/// The first occupied square along each ray, kept when it holds an enemy
/// piece. Squares behind the blocker are unreachable.
pub(crate) fn sliding_captures(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
    owner: Player,
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut distance = 1;
        while let Some(to) = offset_square(from, dr * distance, dc * distance) {
            match board.get_piece(to) {
                None => distance += 1,
                Some(p) => {
                    if p.owner != owner {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Every ray square up to and including the first occupied one, regardless
/// of who occupies it. Feeds attack detection.
pub(crate) fn sliding_attacks(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut attacked = Vec::new();
    for &(dr, dc) in directions {
        let mut distance = 1;
        while let Some(to) = offset_square(from, dr * distance, dc * distance) {
            attacked.push(to);
            if board.get_piece(to).is_some() {
                break;
            }
            distance += 1;
        }
    }
    attacked
}

/// Jump targets that are currently empty.
pub(crate) fn jump_peaceful(board: &Board, from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| offset_square(from, dr, dc))
        .filter(|&to| board.get_piece(to).is_none())
        .collect()
}

/// Jump targets holding an enemy piece.
pub(crate) fn jump_captures(
    board: &Board,
    from: Square,
    offsets: &[(i8, i8)],
    owner: Player,
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| offset_square(from, dr, dc))
        .filter(|&to| matches!(board.get_piece(to), Some(p) if p.owner != owner))
        .collect()
}

/// Jump targets on the board, occupancy ignored.
pub(crate) fn jump_attacks(from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| offset_square(from, dr, dc))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
