//! Errors returned by the user-facing move execution path.
//!
//! These cover bad input only and are always recoverable: the board is left
//! untouched and the caller reports the failure. Internal invariant
//! violations (move-list overflow, out-of-range coordinate access, a desynced
//! location index) are logic bugs and panic instead of appearing here.

use std::fmt;

/// Why [`execute_move`](crate::move_validation::validator::execute_move)
/// rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate was outside 0..=7.
    OutOfRange,
    /// Source and destination are the same square.
    SameSquare,
    /// The source square is empty.
    NoPieceAtSource,
    /// The destination holds a piece of the mover's own team.
    SelfCapture,
    /// A piece blocks the path of movement, or a pawn push is obstructed.
    PathBlocked,
    /// The move does not match the movement pattern of the piece.
    IllegalShape,
    /// Reserved: the mover's king would be left in check. Validation does not
    /// currently produce this variant; kings may legally walk into check.
    KingLeftInCheck,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            MoveError::OutOfRange => "Coordinates are out-of-range",
            MoveError::SameSquare => "Pieces cannot capture themselves",
            MoveError::NoPieceAtSource => "No piece exists at the source coordinates",
            MoveError::SelfCapture => "You cannot capture your own pieces",
            MoveError::PathBlocked => "Another piece is blocking that move",
            MoveError::IllegalShape => "Invalid move",
            MoveError::KingLeftInCheck => "Your king is in check after executing that move",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for MoveError {}
