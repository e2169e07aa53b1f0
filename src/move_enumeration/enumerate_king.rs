use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::move_list::MoveList;

/// The eight adjacent offsets, in enumeration order.
const KING_OFFSETS: [(i16, i16); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Push every pseudo-legal king destination from `(sx,sy)`. No check-safety
/// filtering: squares attacked by the opponent are emitted like any other.
pub fn enumerate_king_moves(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    team: PieceTeam,
    list: &mut MoveList,
) {
    for (off_x, off_y) in KING_OFFSETS {
        let (x, y) = (sx as i16 + off_x, sy as i16 + off_y);
        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            continue;
        }

        match board.piece_at(x as u8, y as u8) {
            None => list.push(sx, sy, x as u8, y as u8),
            Some(occupant) if occupant.team != team => list.push(sx, sy, x as u8, y as u8),
            Some(_) => {}
        }
    }
}
