use super::*;
use crate::PROTOCOL_VERSION;

/// The first packet a client sends after connecting.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Encode, Packet)]
#[packet(id = packet_id::PLAYER_IDENTIFICATION_C2S)]
pub struct PlayerIdentificationC2s<'a> {
    pub protocol_version: u8,
    /// Servers kick players with names longer than 16 characters, but that is
    /// not enforced here.
    pub username: FixedString<'a>,
    /// The key (or "mppass") proving the session is authentic. Can be empty
    /// for servers that don't verify names.
    pub verification_key: FixedString<'a>,
    /// Always zero for a vanilla client.
    pub reserved: u8,
}

impl<'a> PlayerIdentificationC2s<'a> {
    pub fn new(username: &'a str, verification_key: &'a str) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            username: FixedString(username),
            verification_key: FixedString(verification_key),
            reserved: 0,
        }
    }
}
