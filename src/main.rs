//! Interactive driver: renders the board, suggests a move for White, reads
//! the human move from stdin, then answers with the engine's move for Black.
//!
//! Input is four whitespace-separated integers `sx sy dx dy`; a source x of
//! `-1` exits.

use std::io::{self, BufRead, Write};

use quince_chess::board::chessboard::Chessboard;
use quince_chess::board::piece_team::PieceTeam;
use quince_chess::chess_errors::MoveError;
use quince_chess::move_validation::validator::execute_move;
use quince_chess::search::negamax::pick_best_move;
use quince_chess::utils::render_board::render_board;

const SEARCH_DEPTH: u32 = 5;

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Chessboard::new_starting();

    loop {
        println!("{}", render_board(&board));

        let suggestion = pick_best_move(&board, PieceTeam::White, SEARCH_DEPTH);
        if let Some(mv) = suggestion.best_move {
            println!(
                "Computer suggests ({},{}) -> ({},{}) with value {}",
                mv.sx, mv.sy, mv.dx, mv.dy, suggestion.value
            );
        }
        println!(
            "Evaluated {}/{} expanded moves",
            suggestion.counters.moves_evaluated, suggestion.counters.moves_expanded
        );

        loop {
            print!("Enter move: ");
            io::stdout().flush().ok();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => return,
            };
            let fields: Vec<i32> = line
                .split_whitespace()
                .filter_map(|token| token.parse().ok())
                .collect();
            if fields.len() != 4 {
                continue;
            }
            if fields[0] == -1 {
                return;
            }

            let (Ok(sx), Ok(sy), Ok(dx), Ok(dy)) = (
                u8::try_from(fields[0]),
                u8::try_from(fields[1]),
                u8::try_from(fields[2]),
                u8::try_from(fields[3]),
            ) else {
                println!("Error: {}", MoveError::OutOfRange);
                continue;
            };

            match execute_move(&mut board, sx, sy, dx, dy) {
                Ok(()) => {
                    println!("Move succeeded!");
                    break;
                }
                Err(error) => println!("Error: {error}"),
            }
        }

        let reply = pick_best_move(&board, PieceTeam::Black, SEARCH_DEPTH);
        let Some(mv) = reply.best_move else {
            println!("Black has no moves left");
            return;
        };
        println!("Black moves ({},{}) -> ({},{})", mv.sx, mv.sy, mv.dx, mv.dy);

        if let Err(error) = execute_move(&mut board, mv.sx, mv.sy, mv.dx, mv.dy) {
            panic!("engine produced an illegal move: {error}");
        }
    }
}
