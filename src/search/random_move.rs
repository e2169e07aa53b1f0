//! Uniform random move picker.
//!
//! Selects from the side's pseudo-legal moves and serves as a baseline
//! opponent for diagnostics and integration testing.

use rand::prelude::IndexedRandom;

use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::chess_move::ChessMove;
use crate::move_enumeration::enumerator::enumerate_moves;
use crate::move_list::MoveList;

/// Pick one of `team`'s pseudo-legal moves uniformly at random, or `None`
/// when the side has no moves at all.
pub fn pick_random_move(board: &Chessboard, team: PieceTeam) -> Option<ChessMove> {
    let mut moves = Vec::new();

    for piece in board.iterate_team(team) {
        let mut list = MoveList::new();
        let count = enumerate_moves(board, piece, &mut list);
        for _ in 0..count {
            moves.push(list.pop());
        }
    }

    let mut rng = rand::rng();
    moves.as_slice().choose(&mut rng).copied()
}
