use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::chess_errors::MoveError;

/// Check a pawn move.
///
/// White pawns advance toward increasing rank from starting rank 1, black
/// pawns toward decreasing rank from rank 6. Straight moves of one square are
/// always legal onto an empty square; a two-square push is legal only from
/// the starting rank with an empty intermediate square. Straight moves never
/// capture. Diagonal moves go exactly one rank forward and one file sideways
/// and must capture an opposing piece.
pub fn validate_pawn_move(
    board: &Chessboard,
    team: PieceTeam,
    sx: u8,
    sy: u8,
    dx: u8,
    dy: u8,
) -> Result<(), MoveError> {
    let (dist, starting_rank, direction): (i16, u8, i16) = match team {
        PieceTeam::White => (dy as i16 - sy as i16, 1, 1),
        PieceTeam::Black => (sy as i16 - dy as i16, 6, -1),
    };

    if dx == sx {
        if sy == starting_rank {
            if dist != 1 && dist != 2 {
                return Err(MoveError::IllegalShape);
            }
            if dist == 2 && !board.is_empty(sx, (sy as i16 + direction) as u8) {
                return Err(MoveError::PathBlocked);
            }
        } else if dist != 1 {
            return Err(MoveError::IllegalShape);
        }

        // Straight pawn moves never capture.
        if !board.is_empty(dx, dy) {
            return Err(MoveError::PathBlocked);
        }
        Ok(())
    } else {
        if dist != 1 {
            return Err(MoveError::IllegalShape);
        }
        if dx as i16 != sx as i16 + 1 && dx as i16 != sx as i16 - 1 {
            return Err(MoveError::IllegalShape);
        }

        // Diagonal pawn moves exist only to capture.
        if board.is_empty(dx, dy) {
            return Err(MoveError::IllegalShape);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece_class::PieceClass;

    #[test]
    fn black_pawn_advances_toward_rank_zero() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Pawn, PieceTeam::Black, 8, 4, 6);

        assert_eq!(
            validate_pawn_move(&board, PieceTeam::Black, 4, 6, 4, 5),
            Ok(())
        );
        assert_eq!(
            validate_pawn_move(&board, PieceTeam::Black, 4, 6, 4, 4),
            Ok(())
        );
        assert_eq!(
            validate_pawn_move(&board, PieceTeam::Black, 4, 6, 4, 7),
            Err(MoveError::IllegalShape)
        );
    }

    #[test]
    fn two_square_push_needs_an_empty_intermediate() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Pawn, PieceTeam::White, 8, 2, 1);
        board.place_piece(PieceClass::Knight, PieceTeam::Black, 1, 2, 2);

        assert_eq!(
            validate_pawn_move(&board, PieceTeam::White, 2, 1, 2, 3),
            Err(MoveError::PathBlocked)
        );
    }

    #[test]
    fn diagonal_capture_requires_an_occupant() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Pawn, PieceTeam::White, 8, 3, 4);
        board.place_piece(PieceClass::Pawn, PieceTeam::Black, 8, 4, 5);

        assert_eq!(
            validate_pawn_move(&board, PieceTeam::White, 3, 4, 4, 5),
            Ok(())
        );
        assert_eq!(
            validate_pawn_move(&board, PieceTeam::White, 3, 4, 2, 5),
            Err(MoveError::IllegalShape)
        );
    }
}
