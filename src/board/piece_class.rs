/// Kind of a playable piece.
///
/// Empty squares are represented as `None` in the board cells, not as a
/// variant here, so code dispatching on `PieceClass` can never see an empty
/// or otherwise invalid kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
