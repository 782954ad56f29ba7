use chess_engine::board::{Board, GameOutcome, Move, Square};
use chess_engine::evaluation::evaluate_board;

/// Convert a square to algebraic notation (e.g., (7, 4) -> "e1")
fn square_name(square: Square) -> String {
    let file = (b'a' + square.1) as char;
    let rank = (b'8' - square.0) as char;
    format!("{}{}", file, rank)
}

/// One-ply greedy choice: take the legal move whose resulting position
/// scores best for the mover. This sits on top of the engine the way any
/// search layer would, going through `evaluate_board` only.
fn pick_greedy_move(board: &Board) -> Option<Move> {
    let mover = board.side_to_move();
    let mut best: Option<(Move, i32)> = None;

    for mv in board.generate_legal_moves() {
        let mut scratch = board.clone();
        if scratch.move_piece(mv.from, mv.to, false).is_err() {
            continue;
        }
        let score = evaluate_board(&scratch, mover);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    best.map(|(mv, _)| mv)
}

fn main() {
    println!("=== Mailbox Chess Engine ===");
    println!();

    let mut board = Board::starting_position();
    println!("Starting position:");
    println!("{}", board);

    for ply in 1..=16 {
        match board.checkmate_stalemate_checker() {
            GameOutcome::Checkmate => {
                println!("Checkmate. {:?} has no reply.", board.side_to_move());
                break;
            }
            GameOutcome::Stalemate => {
                println!("Stalemate. Draw.");
                break;
            }
            GameOutcome::Ongoing => {}
        }

        let Some(mv) = pick_greedy_move(&board) else {
            break;
        };
        let mover = board.side_to_move();
        if board.move_piece(mv.from, mv.to, true).is_err() {
            break;
        }

        println!(
            "{:2}. {:?} plays {}{}",
            ply,
            mover,
            square_name(mv.from),
            square_name(mv.to)
        );
    }

    println!();
    println!("Final position:");
    println!("{}", board);
    println!(
        "Evaluation (white's view): {}",
        evaluate_board(&board, chess_engine::board::Player::White)
    );
}
