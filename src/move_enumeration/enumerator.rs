//! Pseudo-legal move enumeration, dispatched by piece class.
//!
//! Enumeration obeys movement patterns and capture/blocking rules but never
//! filters for king safety; that vocabulary does not exist in this engine.

use crate::board::chessboard::Chessboard;
use crate::board::piece_class::PieceClass;
use crate::board::piece_record::PieceRecord;
use crate::move_enumeration::enumerate_bishop::enumerate_bishop_moves;
use crate::move_enumeration::enumerate_king::enumerate_king_moves;
use crate::move_enumeration::enumerate_knight::enumerate_knight_moves;
use crate::move_enumeration::enumerate_pawn::enumerate_pawn_moves;
use crate::move_enumeration::enumerate_queen::enumerate_queen_moves;
use crate::move_enumeration::enumerate_rook::enumerate_rook_moves;
use crate::move_list::MoveList;

/// Push every pseudo-legal move for one piece onto `list` and return the
/// number of unread moves in the list. The list is expected to be freshly
/// allocated for this call.
///
/// Panics if the piece is captured or its recorded location disagrees with
/// the board cell; either means the location index is corrupted.
pub fn enumerate_moves(board: &Chessboard, piece: PieceRecord, list: &mut MoveList) -> usize {
    let location = board.location_of(piece);
    assert!(
        !location.is_captured(),
        "enumerate on captured piece slot {}",
        piece.index()
    );
    let (sx, sy) = (location.x, location.y);

    match board.piece_at(sx, sy) {
        Some(found) if found == piece => {}
        other => panic!(
            "location index desync: slot {} recorded at ({sx},{sy}) but cell holds {other:?}",
            piece.index()
        ),
    }

    match piece.class {
        PieceClass::Pawn => enumerate_pawn_moves(board, sx, sy, piece.team, list),
        PieceClass::Rook => enumerate_rook_moves(board, sx, sy, piece.team, list),
        PieceClass::Knight => enumerate_knight_moves(board, sx, sy, piece.team, list),
        PieceClass::Bishop => enumerate_bishop_moves(board, sx, sy, piece.team, list),
        PieceClass::Queen => enumerate_queen_moves(board, sx, sy, piece.team, list),
        PieceClass::King => enumerate_king_moves(board, sx, sy, piece.team, list),
    }

    list.len()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece_team::PieceTeam;
    use crate::chess_move::ChessMove;

    fn drain(list: &mut MoveList) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        while !list.is_empty() {
            moves.push(list.pop());
        }
        moves
    }

    fn enumerate_at(board: &Chessboard, x: u8, y: u8) -> Vec<ChessMove> {
        let piece = board.piece_at(x, y).expect("test square should be occupied");
        let mut list = MoveList::new();
        enumerate_moves(board, piece, &mut list);
        drain(&mut list)
    }

    #[test]
    fn rook_on_an_open_board_has_fourteen_moves() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Rook, PieceTeam::White, 0, 3, 3);

        let moves = enumerate_at(&board, 3, 3);
        assert_eq!(moves.len(), 14);
        for mv in &moves {
            assert!(mv.sx == mv.dx || mv.sy == mv.dy);
        }
    }

    #[test]
    fn queen_ray_stops_before_an_own_piece() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Queen, PieceTeam::White, 3, 3, 3);
        board.place_piece(PieceClass::Pawn, PieceTeam::White, 8, 5, 5);

        let destinations: Vec<(u8, u8)> = enumerate_at(&board, 3, 3)
            .iter()
            .map(|mv| (mv.dx, mv.dy))
            .collect();

        assert!(destinations.contains(&(4, 4)));
        assert!(!destinations.contains(&(5, 5)));
        assert!(!destinations.contains(&(6, 6)));
    }

    #[test]
    fn sliders_capture_the_first_opposing_piece_and_stop() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Bishop, PieceTeam::White, 2, 0, 0);
        board.place_piece(PieceClass::Pawn, PieceTeam::Black, 8, 3, 3);

        let destinations: Vec<(u8, u8)> = enumerate_at(&board, 0, 0)
            .iter()
            .map(|mv| (mv.dx, mv.dy))
            .collect();

        assert_eq!(destinations, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn knight_in_the_corner_has_two_moves() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Knight, PieceTeam::White, 1, 0, 0);

        let destinations: Vec<(u8, u8)> = enumerate_at(&board, 0, 0)
            .iter()
            .map(|mv| (mv.dx, mv.dy))
            .collect();

        assert_eq!(destinations.len(), 2);
        assert!(destinations.contains(&(1, 2)));
        assert!(destinations.contains(&(2, 1)));
    }

    #[test]
    fn king_in_the_corner_has_three_moves() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::King, PieceTeam::Black, 4, 0, 0);

        let moves = enumerate_at(&board, 0, 0);
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn pawn_emits_pushes_then_captures_in_order() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Pawn, PieceTeam::White, 8, 4, 1);
        board.place_piece(PieceClass::Knight, PieceTeam::Black, 1, 3, 2);
        board.place_piece(PieceClass::Knight, PieceTeam::Black, 6, 5, 2);

        let destinations: Vec<(u8, u8)> = enumerate_at(&board, 4, 1)
            .iter()
            .map(|mv| (mv.dx, mv.dy))
            .collect();

        assert_eq!(destinations, vec![(4, 2), (4, 3), (3, 2), (5, 2)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump_with_the_double_push() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Pawn, PieceTeam::White, 8, 4, 1);
        board.place_piece(PieceClass::Rook, PieceTeam::Black, 0, 4, 2);

        assert!(enumerate_at(&board, 4, 1).is_empty());
    }

    #[test]
    fn pawn_on_the_ending_rank_generates_nothing() {
        let mut board = Chessboard::new_empty();
        board.place_piece(PieceClass::Pawn, PieceTeam::White, 8, 2, 7);

        assert!(enumerate_at(&board, 2, 7).is_empty());
    }

    #[test]
    #[should_panic(expected = "enumerate on captured piece")]
    fn enumerating_a_captured_piece_panics() {
        let board = Chessboard::new_empty();
        let ghost = PieceRecord::new(PieceClass::Rook, PieceTeam::White, 0);
        let mut list = MoveList::new();
        let _ = enumerate_moves(&board, ghost, &mut list);
    }
}
