//! Move legality checking and the externally facing move execution entry
//! point.
//!
//! The validator serves interactive callers only. The search never routes
//! through here; it applies pseudo-legal moves from the enumerator directly.

use crate::board::chessboard::Chessboard;
use crate::board::piece_class::PieceClass;
use crate::chess_errors::MoveError;
use crate::chess_move::ChessMove;
use crate::move_validation::validate_bishop::validate_bishop_move;
use crate::move_validation::validate_king::validate_king_move;
use crate::move_validation::validate_knight::validate_knight_move;
use crate::move_validation::validate_pawn::validate_pawn_move;
use crate::move_validation::validate_queen::validate_queen_move;
use crate::move_validation::validate_rook::validate_rook_move;

/// Validate and execute one move on the board.
///
/// Rejects, in order: coordinates outside 0..=7, identical source and
/// destination, an empty source square, a shape or path violation for the
/// source piece's class, and a destination occupied by the mover's own team.
/// Only a fully validated move mutates the board.
pub fn execute_move(
    board: &mut Chessboard,
    sx: u8,
    sy: u8,
    dx: u8,
    dy: u8,
) -> Result<(), MoveError> {
    if sx > 7 || sy > 7 || dx > 7 || dy > 7 {
        return Err(MoveError::OutOfRange);
    }
    if sx == dx && sy == dy {
        return Err(MoveError::SameSquare);
    }

    let source = board.piece_at(sx, sy).ok_or(MoveError::NoPieceAtSource)?;

    match source.class {
        PieceClass::Pawn => validate_pawn_move(board, source.team, sx, sy, dx, dy)?,
        PieceClass::Rook => validate_rook_move(board, sx, sy, dx, dy)?,
        PieceClass::Knight => validate_knight_move(sx, sy, dx, dy)?,
        PieceClass::Bishop => validate_bishop_move(board, sx, sy, dx, dy)?,
        PieceClass::Queen => validate_queen_move(board, sx, sy, dx, dy)?,
        PieceClass::King => validate_king_move(sx, sy, dx, dy)?,
    }

    if let Some(target) = board.piece_at(dx, dy) {
        if target.team == source.team {
            return Err(MoveError::SelfCapture);
        }
    }

    board.apply_raw_move(ChessMove::new(sx, sy, dx, dy));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::board_location::BoardLocation;
    use crate::board::piece_team::PieceTeam;

    #[test]
    fn white_pawn_pushes_from_the_starting_board() {
        let mut board = Chessboard::new_starting();
        assert_eq!(execute_move(&mut board, 0, 1, 0, 2), Ok(()));

        let mut board = Chessboard::new_starting();
        assert_eq!(execute_move(&mut board, 0, 1, 0, 3), Ok(()));

        let mut board = Chessboard::new_starting();
        assert_eq!(
            execute_move(&mut board, 0, 1, 0, 4),
            Err(MoveError::IllegalShape)
        );

        // Diagonal with nothing to capture.
        let mut board = Chessboard::new_starting();
        assert_eq!(
            execute_move(&mut board, 0, 1, 1, 2),
            Err(MoveError::IllegalShape)
        );
    }

    #[test]
    fn pre_dispatch_rejections() {
        let mut board = Chessboard::new_starting();

        assert_eq!(
            execute_move(&mut board, 8, 0, 0, 0),
            Err(MoveError::OutOfRange)
        );
        assert_eq!(
            execute_move(&mut board, 4, 4, 4, 4),
            Err(MoveError::SameSquare)
        );
        assert_eq!(
            execute_move(&mut board, 4, 4, 4, 5),
            Err(MoveError::NoPieceAtSource)
        );
    }

    #[test]
    fn own_pieces_cannot_be_captured() {
        let mut board = Chessboard::new_starting();
        // Rook a1 onto pawn a2.
        assert_eq!(
            execute_move(&mut board, 0, 0, 0, 1),
            Err(MoveError::SelfCapture)
        );
    }

    #[test]
    fn a_rejected_move_leaves_the_board_untouched() {
        let mut board = Chessboard::new_starting();
        let pawn = board.piece_at(0, 1).unwrap();

        let _ = execute_move(&mut board, 0, 1, 0, 4);

        assert_eq!(board.piece_at(0, 1), Some(pawn));
        assert_eq!(board.location_of(pawn), BoardLocation::new(0, 1));
    }

    #[test]
    fn a_capture_updates_both_location_entries() {
        let mut board = Chessboard::new_empty();
        board.place_piece(crate::board::piece_class::PieceClass::Rook, PieceTeam::White, 0, 0, 0);
        board.place_piece(crate::board::piece_class::PieceClass::Pawn, PieceTeam::Black, 8, 0, 5);
        let rook = board.piece_at(0, 0).unwrap();
        let pawn = board.piece_at(0, 5).unwrap();

        assert_eq!(execute_move(&mut board, 0, 0, 0, 5), Ok(()));
        assert_eq!(board.location_of(rook), BoardLocation::new(0, 5));
        assert_eq!(board.location_of(pawn), BoardLocation::CAPTURED);
        assert!(board.is_empty(0, 0));
    }

    #[test]
    fn kings_may_walk_into_check() {
        // There is no check-safety validation anywhere in the engine: the
        // king steps next to an enemy rook and that is accepted.
        let mut board = Chessboard::new_empty();
        board.place_piece(crate::board::piece_class::PieceClass::King, PieceTeam::White, 4, 4, 0);
        board.place_piece(crate::board::piece_class::PieceClass::Rook, PieceTeam::Black, 0, 5, 7);

        assert_eq!(execute_move(&mut board, 4, 0, 5, 0), Ok(()));
    }
}
