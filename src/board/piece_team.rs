/// Owner of a piece, and the side to move in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTeam {
    White,
    Black,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::White => 0,
            PieceTeam::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::White => PieceTeam::Black,
            PieceTeam::Black => PieceTeam::White,
        }
    }
}
