//! Material scoring for the search.
//!
//! Conventions:
//! - Positive scores favor White; negative scores favor Black.
//! - The starting position is materially balanced and evaluates to zero.

use crate::board::chessboard::Chessboard;
use crate::board::piece_class::PieceClass;
use crate::board::piece_team::PieceTeam;

/// Numeric representation of an evaluation score.
pub type Score = i32;

pub const MAX_SCORE: Score = i32::MAX;
/// Symmetric to `MAX_SCORE` so negating an alpha-beta window bound can never
/// overflow.
pub const MIN_SCORE: Score = -i32::MAX;

/// Material value of a piece class.
pub fn material_value(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 12,
        PieceClass::Rook => 60,
        PieceClass::Knight => 36,
        PieceClass::Bishop => 36,
        PieceClass::Queen => 108,
        PieceClass::King => 240,
    }
}

/// Signed material count over every non-captured piece: White's material
/// added, Black's subtracted.
pub fn evaluate_material(board: &Chessboard) -> Score {
    let mut score = 0;
    for piece in board.iterate_team(PieceTeam::White) {
        score += material_value(piece.class);
    }
    for piece in board.iterate_team(PieceTeam::Black) {
        score -= material_value(piece.class);
    }
    score
}
