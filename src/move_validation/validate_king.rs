use crate::chess_errors::MoveError;

/// Check a king move: at most one square in each axis, and not the zero
/// move. No check-safety verification is performed anywhere in this engine;
/// a king may legally step into an attacked square.
pub fn validate_king_move(sx: u8, sy: u8, dx: u8, dy: u8) -> Result<(), MoveError> {
    let run_x = (dx as i16 - sx as i16).abs();
    let run_y = (dy as i16 - sy as i16).abs();

    if run_x <= 1 && run_y <= 1 && (run_x, run_y) != (0, 0) {
        Ok(())
    } else {
        Err(MoveError::IllegalShape)
    }
}
