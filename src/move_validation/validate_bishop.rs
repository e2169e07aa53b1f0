use crate::board::chessboard::Chessboard;
use crate::chess_errors::MoveError;

/// Check a bishop move: a non-zero diagonal with every intervening square
/// empty.
pub fn validate_bishop_move(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    dx: u8,
    dy: u8,
) -> Result<(), MoveError> {
    let run_x = dx as i16 - sx as i16;
    let run_y = dy as i16 - sy as i16;
    if run_x.abs() != run_y.abs() || run_x == 0 {
        return Err(MoveError::IllegalShape);
    }

    let step_x = run_x.signum();
    let step_y = run_y.signum();

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
