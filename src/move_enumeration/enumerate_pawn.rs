use crate::board::chessboard::Chessboard;
use crate::board::piece_team::PieceTeam;
use crate::move_list::MoveList;

/// Push every pseudo-legal pawn destination from `(sx,sy)`, in order:
/// forward one, forward two, the lower-file diagonal, the higher-file
/// diagonal.
///
/// A pawn on its ending rank generates nothing; promotion is out of scope
/// and there is simply no forward square to move to.
pub fn enumerate_pawn_moves(
    board: &Chessboard,
    sx: u8,
    sy: u8,
    team: PieceTeam,
    list: &mut MoveList,
) {
    let (ending_rank, starting_rank, direction): (u8, u8, i16) = match team {
        PieceTeam::White => (7, 1, 1),
        PieceTeam::Black => (0, 6, -1),
    };

    if sy == ending_rank {
        return;
    }
    let forward = (sy as i16 + direction) as u8;

    if board.is_empty(sx, forward) {
        list.push(sx, sy, sx, forward);

        if sy == starting_rank {
            let two_forward = (sy as i16 + 2 * direction) as u8;
            if board.is_empty(sx, two_forward) {
                list.push(sx, sy, sx, two_forward);
            }
        }
    }

    if sx != 0 {
        if let Some(occupant) = board.piece_at(sx - 1, forward) {
            if occupant.team != team {
                list.push(sx, sy, sx - 1, forward);
            }
        }
    }

    if sx != 7 {
        if let Some(occupant) = board.piece_at(sx + 1, forward) {
            if occupant.team != team {
                list.push(sx, sy, sx + 1, forward);
            }
        }
    }
}
