use crate::board::chessboard::Chessboard;
use crate::chess_errors::MoveError;
use crate::move_validation::validate_bishop::validate_bishop_move;
use crate::move_validation::validate_rook::validate_rook_move;

/// Check a queen move: valid if either the rook rule or the bishop rule
/// accepts it.
///
/// When both sub-rules fail: identical error kinds collapse to
/// `IllegalShape`, differing kinds report `PathBlocked`. This exact
/// disambiguation is part of the engine's contract.
pub fn validate_queen_move(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    dx: u8,
    dy: u8,
) -> Result<(), MoveError> {
    let as_rook = validate_rook_move(board, sx, sy, dx, dy);
    if as_rook.is_ok() {
        return Ok(());
    }

    let as_bishop = validate_bishop_move(board, sx, sy, dx, dy);
    if as_bishop.is_ok() {
        return Ok(());
    }

    if as_rook == as_bishop {
        Err(MoveError::IllegalShape)
    } else {
        Err(MoveError::PathBlocked)
    }
}
