//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the interactive driver, tests,
//! and diagnostics in text environments.

use crate::board::chessboard::Chessboard;
use crate::board::piece_class::PieceClass;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::PieceTeam;

/// Render the board to a Unicode string, White's back rank at the bottom.
pub fn render_board(board: &Chessboard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in (0..8u8).rev() {
        out.push(char::from(b'1' + y));
        out.push(' ');

        for x in 0..8u8 {
            match board.piece_at(x, y) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if x < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + y));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: PieceRecord) -> char {
    match (piece.team, piece.class) {
        (PieceTeam::White, PieceClass::Pawn) => '♙',
        (PieceTeam::White, PieceClass::Knight) => '♘',
        (PieceTeam::White, PieceClass::Bishop) => '♗',
        (PieceTeam::White, PieceClass::Rook) => '♖',
        (PieceTeam::White, PieceClass::Queen) => '♕',
        (PieceTeam::White, PieceClass::King) => '♔',
        (PieceTeam::Black, PieceClass::Pawn) => '♟',
        (PieceTeam::Black, PieceClass::Knight) => '♞',
        (PieceTeam::Black, PieceClass::Bishop) => '♝',
        (PieceTeam::Black, PieceClass::Rook) => '♜',
        (PieceTeam::Black, PieceClass::Queen) => '♛',
        (PieceTeam::Black, PieceClass::King) => '♚',
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starting_board_renders_both_back_ranks() {
        let rendered = render_board(&Chessboard::new_starting());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[1].contains('♜'));
        assert!(lines[8].contains('♖'));
        assert!(lines[5].contains('·'));
    }
}
