//! Fixed-point player coordinates.
//!
//! Players are positioned with a resolution of 1/32 of a block. A coordinate
//! in world units is multiplied by 32, rounded to the nearest integer, and sent
//! as an `i16`.

use std::fmt;

use bytes::BufMut;

use crate::Encode;

/// Height of a player's eyes above their feet, in blocks.
///
/// Servers expect the vertical coordinate of a position update to be at eye
/// level, so it is added to the vertical axis before conversion.
pub const EYE_HEIGHT: f64 = 1.21;

/// A coordinate with five fractional bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPoint(pub i16);

impl FixedPoint {
    /// Number of fixed-point steps in one block.
    pub const UNITS_PER_BLOCK: i16 = 32;

    /// Converts a coordinate in world units, rounding to the nearest step.
    ///
    /// Values outside of the `i16` range wrap around instead of saturating.
    ///
    /// ```
    /// use classic_protocol::FixedPoint;
    ///
    /// assert_eq!(FixedPoint::from_world(1.5), FixedPoint(48));
    /// assert_eq!(FixedPoint::from_world(-0.5), FixedPoint(-16));
    /// assert_eq!(FixedPoint::from_world(1024.0), FixedPoint(i16::MIN));
    /// ```
    pub fn from_world(world: f64) -> Self {
        let scaled = (world * f64::from(Self::UNITS_PER_BLOCK)).round();
        // Casting through i64 keeps the low bits, so out of range values wrap.
        Self(scaled as i64 as i16)
    }

    pub fn to_world(self) -> f64 {
        f64::from(self.0) / f64::from(Self::UNITS_PER_BLOCK)
    }
}

impl From<FixedPoint> for f64 {
    fn from(p: FixedPoint) -> Self {
        p.to_world()
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint({})", self.to_world())
    }
}

impl Encode for FixedPoint {
    const ENCODED_LEN: usize = 2;

    fn encode(&self, buf: &mut impl BufMut) {
        self.0.encode(buf);
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn whole_blocks_are_exact() {
        let mut rng = thread_rng();

        for n in (0..10_000).map(|_| rng.gen_range(-1024..1024)) {
            let p = FixedPoint::from_world(f64::from(n));
            assert_eq!(i32::from(p.0), n * 32);
            assert_eq!(p.to_world(), f64::from(n));
        }
    }

    #[test]
    fn rounds_to_nearest_step() {
        assert_eq!(FixedPoint::from_world(EYE_HEIGHT), FixedPoint(39));
        assert_eq!(FixedPoint::from_world(0.01), FixedPoint(0));
        assert_eq!(FixedPoint::from_world(0.02), FixedPoint(1));
        assert_eq!(FixedPoint::from_world(-0.02), FixedPoint(-1));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(FixedPoint::from_world(1023.96875), FixedPoint(i16::MAX));
        assert_eq!(FixedPoint::from_world(1024.0), FixedPoint(i16::MIN));
        assert_eq!(FixedPoint::from_world(2048.0), FixedPoint(0));
        assert_eq!(FixedPoint::from_world(-1024.03125), FixedPoint(i16::MAX));
    }

    #[test]
    fn encodes_big_endian() {
        assert_eq!(FixedPoint(39).encode_to_vec(), [0x00, 0x27]);
        assert_eq!(FixedPoint(-32).encode_to_vec(), [0xff, 0xe0]);
    }
}
