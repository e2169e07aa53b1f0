use crate::board::piece_class::PieceClass;
use crate::board::piece_team::PieceTeam;

/// A piece as stored in a board cell: what it is, whose it is, and which of
/// the sixteen per-team slots it occupies in the location index.
///
/// `(team, id)` is unique across all 32 playable pieces. The id encodes
/// starting identity (0 = queenside rook, 3 = queen, 8..=15 = the pawns) for
/// initial placement only; it carries no rule semantics after setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
    /// Per-team slot, 0..=15.
    pub id: u8,
}

impl PieceRecord {
    pub const fn new(class: PieceClass, team: PieceTeam, id: u8) -> Self {
        PieceRecord { class, team, id }
    }

    /// Slot of this piece in the 32-entry location index.
    ///
    /// Panics if the id is out of range; that is a corrupted record, not
    /// recoverable input.
    #[inline]
    pub fn index(self) -> usize {
        assert!(self.id < 16, "piece id {} out of range", self.id);
        self.team.index() * 16 + self.id as usize
    }
}
