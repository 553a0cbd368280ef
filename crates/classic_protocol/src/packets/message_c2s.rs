use super::*;
use crate::fixed_string::truncate_chars;
use crate::{PLAYER_SELF_ID, STRING_LEN};

/// A chat message or command typed by the player.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Encode, Packet)]
#[packet(id = packet_id::MESSAGE_C2S)]
pub struct MessageC2s<'a> {
    /// Always [`PLAYER_SELF_ID`].
    pub player_id: u8,
    pub message: FixedString<'a>,
}

impl<'a> MessageC2s<'a> {
    /// Creates a message packet. A chat line holds at most [`STRING_LEN`]
    /// characters, anything after that is dropped.
    pub fn new(message: &'a str) -> Self {
        Self {
            player_id: PLAYER_SELF_ID,
            message: FixedString(truncate_chars(message, STRING_LEN)),
        }
    }
}
