use std::fmt;

use bytes::BufMut;
use thiserror::Error;

use crate::Encode;

/// Represents an absolute block position in world space.
///
/// `z` is the vertical axis. On the wire the coordinates are written in the
/// order `x`, `z`, `y`, each as a big-endian `i16`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BlockPos {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl BlockPos {
    /// Constructs a new block position.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Offsets this position, wrapping around at the edges of the `i16`
    /// range.
    pub const fn offset(self, x: i16, y: i16, z: i16) -> Self {
        Self::new(
            self.x.wrapping_add(x),
            self.y.wrapping_add(y),
            self.z.wrapping_add(z),
        )
    }
}

impl Encode for BlockPos {
    const ENCODED_LEN: usize = 6;

    fn encode(&self, buf: &mut impl BufMut) {
        self.x.encode(buf);
        self.z.encode(buf);
        self.y.encode(buf);
    }
}

impl From<[i16; 3]> for BlockPos {
    fn from([x, y, z]: [i16; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<BlockPos> for [i16; 3] {
    fn from(pos: BlockPos) -> Self {
        [pos.x, pos.y, pos.z]
    }
}

impl TryFrom<[i32; 3]> for BlockPos {
    type Error = Error;

    fn try_from(coords @ [x, y, z]: [i32; 3]) -> Result<Self, Self::Error> {
        match (i16::try_from(x), i16::try_from(y), i16::try_from(z)) {
            (Ok(x), Ok(y), Ok(z)) => Ok(Self::new(x, y, z)),
            _ => Err(Error(coords)),
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&(self.x, self.y, self.z), f)
    }
}

/// An error returned when a block position does not fit in the wire range.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
#[error("block position {0:?} is outside of the 16-bit coordinate range")]
pub struct Error(pub [i32; 3]);
