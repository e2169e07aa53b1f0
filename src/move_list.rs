//! Bounded FIFO buffer for enumerated moves.
//!
//! Moves are stored nibble-packed, two bytes per move: one byte `(sy<<4)|sx`
//! for the source and one `(dy<<4)|dx` for the destination. A list holds at
//! most 32 moves, which is generous: the true maximum for a single piece is
//! 27, a queen on an open board. Lists are short-lived, allocated per
//! enumeration call and drained immediately.

use crate::chess_move::ChessMove;

pub const MOVE_LIST_CAPACITY: usize = 32;

pub struct MoveList {
    storage: [u8; MOVE_LIST_CAPACITY * 2],
    write_offset: usize,
    read_offset: usize,
}

impl MoveList {
    pub fn new() -> Self {
        MoveList {
            storage: [0; MOVE_LIST_CAPACITY * 2],
            write_offset: 0,
            read_offset: 0,
        }
    }

    /// Number of unread moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.write_offset - self.read_offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a move. Panics past 32 entries: overflow means an enumeration
    /// bug, not bad input, and must not be silently absorbed.
    pub fn push(&mut self, sx: u8, sy: u8, dx: u8, dy: u8) {
        assert!(
            self.write_offset < MOVE_LIST_CAPACITY,
            "move list overflow pushing ({sx},{sy}) -> ({dx},{dy})"
        );
        let n = self.write_offset * 2;
        self.storage[n] = (sy << 4) | sx;
        self.storage[n + 1] = (dy << 4) | dx;
        self.write_offset += 1;
    }

    /// Remove and return the oldest unread move. Panics on a drained list.
    pub fn pop(&mut self) -> ChessMove {
        assert!(
            self.read_offset < self.write_offset,
            "pop from a drained move list"
        );
        let n = self.read_offset * 2;
        self.read_offset += 1;
        ChessMove {
            sx: self.storage[n] & 0x0f,
            sy: self.storage[n] >> 4,
            dx: self.storage[n + 1] & 0x0f,
            dy: self.storage[n + 1] >> 4,
        }
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}
