/// A move as four 0..=7 coordinates, from `(sx,sy)` to `(dx,dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub sx: u8,
    pub sy: u8,
    pub dx: u8,
    pub dy: u8,
}

impl ChessMove {
    pub const fn new(sx: u8, sy: u8, dx: u8, dy: u8) -> Self {
        ChessMove { sx, sy, dx, dy }
    }

    /// Pack into the byte-wise wire encoding `sx | sy<<8 | dx<<16 | dy<<24`.
    pub const fn pack(self) -> u32 {
        self.sx as u32 | (self.sy as u32) << 8 | (self.dx as u32) << 16 | (self.dy as u32) << 24
    }

    /// Unpack the encoding produced by [`ChessMove::pack`].
    pub const fn unpack(raw: u32) -> Self {
        ChessMove {
            sx: (raw & 0xff) as u8,
            sy: (raw >> 8 & 0xff) as u8,
            dx: (raw >> 16 & 0xff) as u8,
            dy: (raw >> 24 & 0xff) as u8,
        }
    }
}
