//! Packets sent by a Classic client.

use crate::block_pos::BlockPos;
use crate::byte_angle::ByteAngle;
use crate::fixed_point::FixedPoint;
use crate::fixed_string::FixedString;
use crate::{packet_id, Encode, Packet};

pub mod message_c2s;
pub mod player_identification_c2s;
pub mod position_and_orientation_c2s;
pub mod set_block_c2s;

pub use message_c2s::MessageC2s;
pub use player_identification_c2s::PlayerIdentificationC2s;
pub use position_and_orientation_c2s::PositionAndOrientationC2s;
pub use set_block_c2s::{SetBlockC2s, SetBlockMode};
