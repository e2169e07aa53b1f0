//! Shared ray walking for the sliding pieces.

use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::move_list::MoveList;

/// Rook ray directions, walked in N, S, E, W order.
pub const ROOK_RAY_STEPS: [(i16, i16); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop ray directions, walked in NE, SE, NW, SW order.
pub const BISHOP_RAY_STEPS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk one ray from `(sx,sy)`, pushing every empty square, then the first
/// occupied square only when its occupant is the opposing team, then
/// stopping.
pub fn walk_ray(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    team: PieceTeam,
    step_x: i16,
    step_y: i16,
    list: &mut MoveList,
) {
    let (mut x, mut y) = (sx as i16 + step_x, sy as i16 + step_y);

    while (0..8).contains(&x) && (0..8).contains(&y) {
        match board.piece_at(x as u8, y as u8) {
            None => list.push(sx, sy, x as u8, y as u8),
            Some(occupant) => {
                if occupant.team != team {
                    list.push(sx, sy, x as u8, y as u8);
                }
                break;
            }
        }
        x += step_x;
        y += step_y;
    }
}
