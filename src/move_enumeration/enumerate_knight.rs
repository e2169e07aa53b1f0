use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::move_list::MoveList;

/// The eight jump offsets, in enumeration order.
const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Push every pseudo-legal knight destination from `(sx,sy)`: each offset
/// landing on the board whose target is empty or holds an opposing piece.
pub fn enumerate_knight_moves(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    team: PieceTeam,
    list: &mut MoveList,
) {
    for (off_x, off_y) in KNIGHT_OFFSETS {
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
