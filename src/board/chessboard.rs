//! Packed board representation with an auxiliary piece-location index.
//!
//! Squares are an 8x8 matrix of optional piece records, `squares[y][x]` with
//! `y` the rank and `x` the file. The current location of each of the 32
//! pieces is also maintained in a 32-entry array indexed by
//! `team.index() * 16 + id`, with `(15,15)` marking a captured piece. This
//! gives O(1) "where is piece N" lookups and O(1) iteration over one team's
//! pieces.
//!
//! Invariant, upheld by every mutation: the cell at a non-captured piece's
//! recorded location holds a record with that piece's `(team, id)`, and every
//! occupied cell's `(team, id)` has a location entry pointing back at it.

use crate::board::board_location::BoardLocation;
use crate::board::piece_class::PieceClass;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::PieceTeam;
use crate::chess_move::ChessMove;

/// Back-rank classes from file 0 to file 7. Ids 0..=7 run in the same order;
/// the pawns in front take ids 8..=15.
const BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

#[derive(Clone)]
pub struct Chessboard {
    squares: [[Option<PieceRecord>; 8]; 8],
    locations: [BoardLocation; 32],
}

impl Chessboard {
    /// An empty board: no pieces, every location entry captured.
    pub fn new_empty() -> Self {
        Chessboard {
            squares: [[None; 8]; 8],
            locations: [BoardLocation::CAPTURED; 32],
        }
    }

    /// The standard starting arrangement, 16 pieces per side.
    ///
    /// White occupies ranks 0 and 1, black ranks 7 and 6.
    pub fn new_starting() -> Self {
        let mut board = Chessboard::new_empty();

        for (back_rank, pawn_rank, team) in
            [(0u8, 1u8, PieceTeam::White), (7u8, 6u8, PieceTeam::Black)]
        {
            for file in 0..8u8 {
                board.place_piece(BACK_RANK[file as usize], team, file, file, back_rank);
                board.place_piece(PieceClass::Pawn, team, 8 + file, file, pawn_rank);
            }
        }

        board
    }

    /// Place a piece during position setup. No rule checking is performed;
    /// the target square must be empty and the `(team, id)` slot unused.
    pub fn place_piece(&mut self, class: PieceClass, team: PieceTeam, id: u8, x: u8, y: u8) {
        let piece = PieceRecord::new(class, team, id);
        assert!(
            self.piece_at(x, y).is_none(),
            "place_piece onto occupied square ({x},{y})"
        );
        assert!(
            self.locations[piece.index()].is_captured(),
            "place_piece reusing live slot {}",
            piece.index()
        );

        self.squares[y as usize][x as usize] = Some(piece);
        self.locations[piece.index()] = BoardLocation::new(x, y);
    }

    /// The piece on square `(x,y)`, if any. Panics on out-of-range
    /// coordinates; internal callers never pass user input here unchecked.
    #[inline]
    pub fn piece_at(&self, x: u8, y: u8) -> Option<PieceRecord> {
        assert!(x < 8 && y < 8, "square ({x},{y}) out of range");
        self.squares[y as usize][x as usize]
    }

    #[inline]
    pub fn is_empty(&self, x: u8, y: u8) -> bool {
        self.piece_at(x, y).is_none()
    }

    /// Current location of a piece, possibly the captured sentinel.
    #[inline]
    pub fn location_of(&self, piece: PieceRecord) -> BoardLocation {
        self.locations[piece.index()]
    }

    /// Iterate one team's non-captured pieces, visiting the location-index
    /// slots in increasing id order.
    pub fn iterate_team(&self, team: PieceTeam) -> impl Iterator<Item = PieceRecord> + '_ {
        let base = team.index() * 16;
        (base..base + 16).filter_map(move |slot| {
            let location = self.locations[slot];
            if location.is_captured() {
                return None;
            }
            let piece = self.squares[location.y as usize][location.x as usize]
                .unwrap_or_else(|| {
                    panic!(
                        "location slot {slot} points at empty square ({},{})",
                        location.x, location.y
                    )
                });
            Some(piece)
        })
    }

    /// Apply a move with no legality checking: mark any occupant of the
    /// destination as captured, update the mover's location entry, write the
    /// mover into the destination cell, and clear the source cell.
    pub fn apply_raw_move(&mut self, mv: ChessMove) {
        if let Some(target) = self.piece_at(mv.dx, mv.dy) {
            self.locations[target.index()] = BoardLocation::CAPTURED;
        }

        let source = self
            .piece_at(mv.sx, mv.sy)
            .unwrap_or_else(|| panic!("raw move from empty square ({},{})", mv.sx, mv.sy));
        self.locations[source.index()] = BoardLocation::new(mv.dx, mv.dy);

        self.squares[mv.dy as usize][mv.dx as usize] = Some(source);
        self.squares[mv.sy as usize][mv.sx as usize] = None;
    }
}
