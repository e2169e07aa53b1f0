use crate::chess_errors::MoveError;

/// Check a knight move: exactly an L-shape, two squares in one axis and one
/// in the other. Knights jump, so occupancy along the way is irrelevant.
pub fn validate_knight_move(sx: u8, sy: u8, dx: u8, dy: u8) -> Result<(), MoveError> {
    let run_x = (dx as i16 - sx as i16).abs();
    let run_y = (dy as i16 - sy as i16).abs();

    if (run_x == 2 && run_y == 1) || (run_x == 1 && run_y == 2) {
        Ok(())
    } else {
        Err(MoveError::IllegalShape)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_all_eight_l_shapes() {
        for (dx, dy) in [(5, 5), (5, 3), (3, 5), (3, 3), (6, 4), (6, 2), (2, 4), (2, 2)] {
            assert_eq!(validate_knight_move(4, 3, dx, dy), Ok(()));
        }
    }

    #[test]
    fn rejects_non_l_shapes() {
        assert_eq!(validate_knight_move(4, 3, 4, 5), Err(MoveError::IllegalShape));
        assert_eq!(validate_knight_move(4, 3, 6, 5), Err(MoveError::IllegalShape));
        assert_eq!(validate_knight_move(4, 3, 5, 4), Err(MoveError::IllegalShape));
    }
}
