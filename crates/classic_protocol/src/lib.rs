#![doc = include_str!("../README.md")]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    unreachable_pub,
    clippy::dbg_macro
)]

/// Used only by macros. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use bytes::BufMut;

    pub use crate::{Encode, Packet, PacketSide};
}

// This allows us to use our own proc macros internally.
extern crate self as classic_protocol;

pub mod block_pos;
pub mod builders;
mod byte_angle;
pub mod encode;
pub mod fixed_point;
pub mod fixed_string;
mod impls;
pub mod packet_id;
pub mod packets;

use std::fmt;

pub use block_pos::BlockPos;
pub use byte_angle::ByteAngle;
use bytes::BufMut;
pub use classic_protocol_macros::{Encode, Packet};
pub use encode::{PacketEncoder, PacketWriter, WritePacket};
pub use fixed_point::FixedPoint;
pub use fixed_string::FixedString;
pub use packets::SetBlockMode;
pub use {anyhow, bytes};

/// The Classic protocol version this library targets.
pub const PROTOCOL_VERSION: u8 = 7;

/// The number of bytes in every string field of the protocol.
pub const STRING_LEN: usize = 64;

/// Player ID a client uses to refer to itself.
pub const PLAYER_SELF_ID: u8 = 0xff;

/// The `Encode` trait allows objects to be written to the Classic protocol.
///
/// Every value in the protocol has a size known ahead of time, which is
/// exposed through [`Encode::ENCODED_LEN`]. Encoding is infallible: the
/// value is appended to any [`BufMut`], growing it if needed.
///
/// # Deriving
///
/// This trait can be implemented automatically for structs and fieldless enums
/// by using the [`Encode`][macro] derive macro. All fields of a struct must
/// implement `Encode` and are encoded in the order they appear in the type
/// definition. Enums are encoded as a single byte tag. Tags are assigned
/// like regular enum discriminants and can be changed with the
/// `#[packet(tag = ...)]` attribute on a variant.
///
/// ```
/// use classic_protocol::Encode;
///
/// #[derive(Encode)]
/// struct MyStruct {
///     first: u8,
///     second: i16,
///     third: [u8; 3],
/// }
///
/// #[derive(Encode)]
/// enum MyEnum {
///     First,  // tag = 0
///     Second, // tag = 1
///     #[packet(tag = 25)]
///     Third, // tag = 25
///     Fourth, // tag = 26
/// }
///
/// let value = MyStruct {
///     first: 10,
///     second: -2,
///     third: [1, 2, 3],
/// };
///
/// assert_eq!(MyStruct::ENCODED_LEN, 6);
/// assert_eq!(value.encode_to_vec(), [10, 0xff, 0xfe, 1, 2, 3]);
/// assert_eq!(MyEnum::Fourth.encode_to_vec(), [26]);
/// ```
///
/// [macro]: classic_protocol_macros::Encode
pub trait Encode {
    /// The exact number of bytes [`Encode::encode`] appends.
    const ENCODED_LEN: usize;

    /// Appends this object to the provided buffer.
    fn encode(&self, buf: &mut impl BufMut);

    /// Like [`Encode::encode`], except that a whole slice of values is encoded.
    ///
    /// This must be equivalent to encoding every element of the slice in
    /// sequence with no leading length prefix (which is exactly what the
    /// default implementation does). Types like `u8` override it to copy the
    /// slice in a single call.
    fn encode_slice(slice: &[Self], buf: &mut impl BufMut)
    where
        Self: Sized,
    {
        for value in slice {
            value.encode(buf);
        }
    }

    /// Encodes this object into a freshly allocated vector of exactly
    /// [`Encode::ENCODED_LEN`] bytes.
    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::ENCODED_LEN);
        self.encode(&mut buf);
        buf
    }
}

/// Types considered to be Classic packets.
///
/// In serialized form, a packet begins with a single byte packet ID followed
/// by the body of the packet. The implementation of [`Encode`] on `Self` only
/// encodes the _body_ of the packet without the leading ID.
pub trait Packet: Encode + fmt::Debug {
    /// The leading ID byte of this packet.
    const ID: u8;
    /// The name of this packet for debugging purposes.
    const NAME: &'static str;
    /// The side this packet is intended for.
    const SIDE: PacketSide;
    /// The number of bytes this packet occupies on the wire, ID included.
    const LEN: usize = 1 + <Self as Encode>::ENCODED_LEN;

    /// Encodes this packet's ID first, followed by the packet's body.
    fn encode_with_id(&self, buf: &mut impl BufMut) {
        buf.put_u8(Self::ID);
        self.encode(buf);
    }

    /// Encodes the whole packet into a vector of exactly [`Packet::LEN`]
    /// bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::LEN);
        self.encode_with_id(&mut buf);
        debug_assert_eq!(buf.len(), Self::LEN, "length mismatch in {}", Self::NAME);
        buf
    }
}

/// The side a packet is intended for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PacketSide {
    /// Server -> Client
    Clientbound,
    /// Client -> Server
    Serverbound,
}
