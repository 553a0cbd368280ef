use super::*;

/// Sent when the player places or breaks a block.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Encode, Packet)]
#[packet(id = packet_id::SET_BLOCK_C2S)]
pub struct SetBlockC2s {
    pub position: BlockPos,
    pub mode: SetBlockMode,
    /// The block held by the player. Servers use it even when deleting.
    pub block_type: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Encode)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SetBlockMode {
    Delete,
    #[default]
    Create,
}

impl From<bool> for SetBlockMode {
    /// `true` creates a block, `false` deletes it.
    fn from(create: bool) -> Self {
        if create {
            Self::Create
        } else {
            Self::Delete
        }
    }
}
