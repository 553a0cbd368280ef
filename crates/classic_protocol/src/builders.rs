//! One-call builders for every packet a client sends.
//!
//! Each function returns a freshly allocated buffer holding exactly one
//! packet, ID included. They hold no state, so they can be called from any
//! number of threads at once.

use crate::packets::{
    MessageC2s, PlayerIdentificationC2s, PositionAndOrientationC2s, SetBlockC2s, SetBlockMode,
};
use crate::{BlockPos, ByteAngle, Packet};

/// Builds the 131 byte login packet.
pub fn build_login_packet(username: &str, verification_key: &str) -> Vec<u8> {
    PlayerIdentificationC2s::new(username, verification_key).to_bytes()
}

/// Builds the 9 byte packet which places or removes a block at `(x, y, z)`.
pub fn build_set_block_packet(
    x: i16,
    y: i16,
    z: i16,
    mode: SetBlockMode,
    block_type: u8,
) -> Vec<u8> {
    SetBlockC2s {
        position: BlockPos::new(x, y, z),
        mode,
        block_type,
    }
    .to_bytes()
}

/// Builds the 10 byte position update packet from coordinates in world units.
///
/// See [`PositionAndOrientationC2s::from_world`] for how the coordinates are
/// converted.
pub fn build_position_packet(x: f64, y: f64, z: f64, yaw: u8, pitch: u8) -> Vec<u8> {
    PositionAndOrientationC2s::from_world(x, y, z, ByteAngle(yaw), ByteAngle(pitch)).to_bytes()
}

/// Builds the 66 byte chat packet. Text past the 64th character is dropped.
pub fn build_message_packet(text: &str) -> Vec<u8> {
    MessageC2s::new(text).to_bytes()
}
