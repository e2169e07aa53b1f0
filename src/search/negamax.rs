//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Every explored child clones the board, applies the candidate move, and
//! recurses with the negated, swapped window; the clone is dropped when the
//! call returns, so no board is ever shared between in-flight nodes and the
//! search is re-entrant.
//!
//! Enumeration is batched by piece: a beta cutoff abandons the remaining
//! moves of the current piece only, and the outer piece iteration continues.
//! This "weak" pruning explores more nodes than piece-agnostic alpha-beta
//! but returns the same value for a deterministic evaluator, and the
//! diagnostic counters depend on it. Tests pin this behavior.

use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::chess_move::ChessMove;
use crate::move_enumeration::enumerator::enumerate_moves;
use crate::move_list::MoveList;
use crate::search::board_scoring::{evaluate_material, Score, MAX_SCORE, MIN_SCORE};

/// Diagnostic tallies for one top-level search. Threaded through the
/// recursion by reference; purely observational, never used for control
/// flow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchCounters {
    /// Moves pushed onto a move list during enumeration.
    pub moves_expanded: u64,
    /// Moves actually applied to a board copy and recursed into.
    pub moves_evaluated: u64,
}

/// Outcome of a top-level [`pick_best_move`] call.
#[derive(Debug, Clone, Copy)]
pub struct BestMove {
    /// The move that produced the best value, or `None` when the side to
    /// move has no pieces with moves.
    pub best_move: Option<ChessMove>,
    pub value: Score,
    pub counters: SearchCounters,
}

impl BestMove {
    /// The byte-wise wire form `sx | sy<<8 | dx<<16 | dy<<24`, or all-ones
    /// when there is no move.
    pub fn packed(&self) -> u32 {
        match self.best_move {
            Some(mv) => mv.pack(),
            None => u32::MAX,
        }
    }
}

/// Evaluate `board` to `depth` plies from the perspective of `team`.
///
/// At depth zero this is the material evaluation, negated for Black so the
/// return value is always "higher is better for the side to move".
pub fn negamax(
    board: &Chessboard,
    team: PieceTeam,
    depth: u32,
    mut alpha: Score,
    beta: Score,
    counters: &mut SearchCounters,
) -> Score {
    if depth == 0 {
        return match team {
            PieceTeam::White => evaluate_material(board),
            PieceTeam::Black => -evaluate_material(board),
        };
    }

    let mut best = MIN_SCORE;

    for piece in board.iterate_team(team) {
        let mut list = MoveList::new();
        let count = enumerate_moves(board, piece, &mut list);
        counters.moves_expanded += count as u64;

        for _ in 0..count {
            let mv = list.pop();

            let mut child = board.clone();
            child.apply_raw_move(mv);
            counters.moves_evaluated += 1;

            let value = -negamax(&child, team.opposite(), depth - 1, -beta, -alpha, counters);

            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                // Abandons this piece's remaining moves only; the next piece
                // is still enumerated.
                break;
            }
        }
    }

    best
}

/// One-ply unrolling of [`negamax`] that also remembers which root move
/// produced the best value. The first move encountered wins ties; strict
/// greater-than is used to update the best.
pub fn pick_best_move(board: &Chessboard, team: PieceTeam, depth: u32) -> BestMove {
    assert!(depth >= 1, "pick_best_move needs at least one ply");

    let mut counters = SearchCounters::default();
    let mut alpha = MIN_SCORE;
    let beta = MAX_SCORE;
    let mut best_value = MIN_SCORE;
    let mut best_move = None;

    for piece in board.iterate_team(team) {
        let mut list = MoveList::new();
        let count = enumerate_moves(board, piece, &mut list);
        counters.moves_expanded += count as u64;

        for _ in 0..count {
            let mv = list.pop();

            let mut child = board.clone();
            child.apply_raw_move(mv);
            counters.moves_evaluated += 1;

            let value = -negamax(&child, team.opposite(), depth - 1, -beta, -alpha, &mut counters);

            alpha = alpha.max(value);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }
    }

    BestMove {
        best_move,
        value: best_value,
        counters,
    }
}
