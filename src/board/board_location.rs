/// A square coordinate on the 8x8 board, or the captured sentinel.
///
/// Both coordinates are 0..=7 for a piece on the board. `(15,15)` marks a
/// piece that has been captured and is no longer present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLocation {
    pub x: u8,
    pub y: u8,
}

impl BoardLocation {
    /// Sentinel for a piece removed from the board.
    pub const CAPTURED: BoardLocation = BoardLocation { x: 15, y: 15 };

    pub const fn new(x: u8, y: u8) -> Self {
        BoardLocation { x, y }
    }

    #[inline]
    pub const fn is_captured(self) -> bool {
        self.x == 15
    }
}
