use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::move_enumeration::enumerate_bishop::enumerate_bishop_moves;
use crate::move_enumeration::enumerate_rook::enumerate_rook_moves;
use crate::move_list::MoveList;

/// Push every pseudo-legal queen destination: the rook rays, then the
/// bishop rays.
pub fn enumerate_queen_moves(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    team: PieceTeam,
    list: &mut MoveList,
) {
    enumerate_rook_moves(board, sx, sy, team, list);
    enumerate_bishop_moves(board, sx, sy, team, list);
}
