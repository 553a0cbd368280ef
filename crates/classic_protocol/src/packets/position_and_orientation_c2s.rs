use super::*;
use crate::fixed_point::EYE_HEIGHT;
use crate::PLAYER_SELF_ID;

/// Sent periodically with the player's position and orientation.
///
/// Fields are declared in wire order, which puts the vertical `z` axis
/// before `y`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Encode, Packet)]
#[packet(id = packet_id::POSITION_AND_ORIENTATION_C2S)]
pub struct PositionAndOrientationC2s {
    /// Always [`PLAYER_SELF_ID`].
    pub player_id: u8,
    pub x: FixedPoint,
    pub z: FixedPoint,
    pub y: FixedPoint,
    pub yaw: ByteAngle,
    pub pitch: ByteAngle,
}

impl PositionAndOrientationC2s {
    /// Builds the packet from a position in world units, with `z` measured at
    /// the player's feet. [`EYE_HEIGHT`] is added to `z` before conversion.
    pub fn from_world(x: f64, y: f64, z: f64, yaw: ByteAngle, pitch: ByteAngle) -> Self {
        Self {
            player_id: PLAYER_SELF_ID,
            x: FixedPoint::from_world(x),
            z: FixedPoint::from_world(z + EYE_HEIGHT),
            y: FixedPoint::from_world(y),
            yaw,
            pitch,
        }
    }
}
