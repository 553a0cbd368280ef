//! Packet IDs of the Classic protocol.
//!
//! Client and server share the ID space, so IDs are only unique per side.

// Serverbound
pub const PLAYER_IDENTIFICATION_C2S: u8 = 0x00;
pub const SET_BLOCK_C2S: u8 = 0x05;
pub const POSITION_AND_ORIENTATION_C2S: u8 = 0x08;
pub const MESSAGE_C2S: u8 = 0x0d;

// Clientbound
pub const SERVER_IDENTIFICATION_S2C: u8 = 0x00;
pub const PING_S2C: u8 = 0x01;
pub const LEVEL_INITIALIZE_S2C: u8 = 0x02;
pub const LEVEL_DATA_CHUNK_S2C: u8 = 0x03;
pub const LEVEL_FINALIZE_S2C: u8 = 0x04;
pub const SET_BLOCK_S2C: u8 = 0x06;
pub const SPAWN_PLAYER_S2C: u8 = 0x07;
pub const SET_POSITION_AND_ORIENTATION_S2C: u8 = 0x08;
pub const POSITION_AND_ORIENTATION_UPDATE_S2C: u8 = 0x09;
pub const POSITION_UPDATE_S2C: u8 = 0x0a;
pub const ORIENTATION_UPDATE_S2C: u8 = 0x0b;
pub const DESPAWN_PLAYER_S2C: u8 = 0x0c;
pub const MESSAGE_S2C: u8 = 0x0d;
pub const DISCONNECT_PLAYER_S2C: u8 = 0x0e;
pub const UPDATE_USER_TYPE_S2C: u8 = 0x0f;

/// Returns the name of the serverbound packet with the given ID.
pub fn serverbound_name(id: u8) -> Option<&'static str> {
    Some(match id {
        PLAYER_IDENTIFICATION_C2S => "PlayerIdentificationC2s",
        SET_BLOCK_C2S => "SetBlockC2s",
        POSITION_AND_ORIENTATION_C2S => "PositionAndOrientationC2s",
        MESSAGE_C2S => "MessageC2s",
        _ => return None,
    })
}
