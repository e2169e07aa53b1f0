use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::move_enumeration::slider_rays::{walk_ray, ROOK_RAY_STEPS};
use crate::move_list::MoveList;

/// Push every pseudo-legal rook destination from `(sx,sy)`.
pub fn enumerate_rook_moves(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    team: PieceTeam,
    list: &mut MoveList,
) {
    for (step_x, step_y) in ROOK_RAY_STEPS {
        walk_ray(board, sx, sy, team, step_x, step_y, list);
    }
}
