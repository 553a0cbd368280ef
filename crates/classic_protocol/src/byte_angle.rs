use std::fmt;

use bytes::BufMut;

use crate::Encode;

/// Represents an angle in steps of 1/256 of a full turn.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteAngle(pub u8);

impl ByteAngle {
    /// Converts degrees to the nearest step. Angles that round up to a full
    /// turn become zero.
    pub fn from_degrees(f: f32) -> ByteAngle {
        ByteAngle((f.rem_euclid(360.0) / 360.0 * 256.0).round() as u32 as u8)
    }

    pub fn to_degrees(self) -> f32 {
        f32::from(self.0) / 256.0 * 360.0
    }
}

impl From<u8> for ByteAngle {
    fn from(steps: u8) -> Self {
        Self(steps)
    }
}

impl fmt::Debug for ByteAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ByteAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degrees())
    }
}

impl Encode for ByteAngle {
    const ENCODED_LEN: usize = 1;

    fn encode(&self, buf: &mut impl BufMut) {
        self.0.encode(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees() {
        assert_eq!(ByteAngle::from_degrees(0.0), ByteAngle(0));
        assert_eq!(ByteAngle::from_degrees(90.0), ByteAngle(64));
        assert_eq!(ByteAngle::from_degrees(-90.0), ByteAngle(192));
        assert_eq!(ByteAngle(128).to_degrees(), 180.0);
    }

    #[test]
    fn almost_full_turn_wraps_to_zero() {
        assert_eq!(ByteAngle::from_degrees(359.9), ByteAngle(0));
        assert_eq!(ByteAngle::from_degrees(-0.1), ByteAngle(0));
        assert_eq!(ByteAngle::from_degrees(358.0), ByteAngle(255));
    }
}
