use crate::board::chessboard::Chessboard;
use crate::chess_errors::MoveError;

/// Check a rook move: source and destination must differ in exactly one
/// axis, and every square strictly between them must be empty.
pub fn validate_rook_move(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    dx: u8,
    dy: u8,
) -> Result<(), MoveError> {
    if sx != dx && sy != dy {
        return Err(MoveError::IllegalShape);
    }

    let step_x: i16 = (dx as i16 - sx as i16).signum();
    let step_y: i16 = (dy as i16 - sy as i16).signum();

    let (mut x, mut y) = (sx as i16 + step_x, sy as i16 + step_y);
    while (x, y) != (dx as i16, dy as i16) {
        if !board.is_empty(x as u8, y as u8) {
            return Err(MoveError::PathBlocked);
        }
        x += step_x;
        y += step_y;
    }

    Ok(())
}
