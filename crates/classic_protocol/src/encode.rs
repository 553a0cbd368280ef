use std::io::Write;

use anyhow::Context;
use bytes::{BufMut, BytesMut};
use tracing::{trace, warn};

use crate::Packet;

/// Accumulates encoded packets in a single buffer, ready to be sent over a
/// connection.
///
/// Classic packets have no length prefix or compression, so the buffer is
/// simply the concatenation of every packet appended so far.
#[derive(Default, Debug)]
pub struct PacketEncoder {
    buf: BytesMut,
}

impl PacketEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes)
    }

    pub fn append_packet<P: Packet>(&mut self, pkt: &P) {
        self.buf.reserve(P::LEN);
        pkt.encode_with_id(&mut self.buf);
        trace!(packet = P::NAME, len = P::LEN, "appended packet");
    }

    /// Like [`PacketEncoder::append_packet`], but the packet is placed before
    /// everything that has not been [taken] yet.
    ///
    /// [taken]: Self::take
    pub fn prepend_packet<P: Packet>(&mut self, pkt: &P) {
        let start_len = self.buf.len();
        self.append_packet(pkt);
        self.move_to_back(start_len);
    }

    fn move_to_back(&mut self, from: usize) {
        // 1) Move everything back by the length of the packet.
        // 2) Move the packet to the new space at the front.
        // 3) Truncate the old packet away.
        let to = self.buf.len();
        let len = to - from;

        self.buf.put_bytes(0, len);
        self.buf.copy_within(..to, len);
        self.buf.copy_within(to.., 0);
        self.buf.truncate(to);
    }

    /// Takes all the packets written so far.
    pub fn take(&mut self) -> BytesMut {
        self.buf.split()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Types that can have packets written to them.
pub trait WritePacket {
    /// Writes a packet to this object. Errors are logged and discarded.
    fn write_packet<P: Packet>(&mut self, packet: &P) {
        if let Err(e) = self.write_packet_fallible(packet) {
            warn!("failed to write packet '{}': {e:#}", P::NAME);
        }
    }

    /// Writes a packet to this object. The result of writing the packet is
    /// returned.
    fn write_packet_fallible<P: Packet>(&mut self, packet: &P) -> anyhow::Result<()>;

    /// Copies raw packet data directly into this object. Don't use this unless
    /// you know what you're doing.
    fn write_packet_bytes(&mut self, bytes: &[u8]);
}

impl<W: WritePacket> WritePacket for &mut W {
    fn write_packet_fallible<P: Packet>(&mut self, packet: &P) -> anyhow::Result<()> {
        (*self).write_packet_fallible(packet)
    }

    fn write_packet_bytes(&mut self, bytes: &[u8]) {
        (*self).write_packet_bytes(bytes)
    }
}

impl WritePacket for PacketEncoder {
    fn write_packet_fallible<P: Packet>(&mut self, packet: &P) -> anyhow::Result<()> {
        self.append_packet(packet);
        Ok(())
    }

    fn write_packet_bytes(&mut self, bytes: &[u8]) {
        self.append_bytes(bytes)
    }
}

/// An implementor of [`WritePacket`] backed by any [`Write`] sink, such as a
/// `TcpStream`.
///
/// Each packet is encoded in full before any of it reaches the sink.
#[derive(Debug)]
pub struct PacketWriter<W> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W: Write> PacketWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: vec![],
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("failed to flush packet writer")
    }
}

impl<W: Write> WritePacket for PacketWriter<W> {
    fn write_packet_fallible<P: Packet>(&mut self, pkt: &P) -> anyhow::Result<()> {
        self.scratch.clear();
        pkt.encode_with_id(&mut self.scratch);

        self.writer
            .write_all(&self.scratch)
            .with_context(|| format!("failed to write {} bytes of '{}'", P::LEN, P::NAME))
    }

    fn write_packet_bytes(&mut self, bytes: &[u8]) {
        if let Err(e) = self.writer.write_all(bytes) {
            warn!("failed to write packet bytes: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::builders::{build_login_packet, build_message_packet, build_set_block_packet};
    use crate::packets::{MessageC2s, PlayerIdentificationC2s, SetBlockC2s, SetBlockMode};
    use crate::BlockPos;

    fn set_block() -> SetBlockC2s {
        SetBlockC2s {
            position: BlockPos::new(4, 5, 6),
            mode: SetBlockMode::Create,
            block_type: 20,
        }
    }

    #[test]
    fn appended_packets_are_concatenated() {
        let mut enc = PacketEncoder::new();

        enc.append_packet(&PlayerIdentificationC2s::new("bot", "key"));
        enc.append_packet(&set_block());
        enc.append_packet(&MessageC2s::new("hi"));

        assert_eq!(enc.len(), 131 + 9 + 66);

        let mut expected = build_login_packet("bot", "key");
        expected.extend(build_set_block_packet(4, 5, 6, SetBlockMode::Create, 20));
        expected.extend(build_message_packet("hi"));

        assert_eq!(enc.take(), expected);
        assert!(enc.is_empty());
    }

    #[test]
    fn prepend_goes_first() {
        let mut enc = PacketEncoder::new();

        enc.append_packet(&MessageC2s::new("second"));
        enc.prepend_packet(&MessageC2s::new("first"));

        let mut expected = build_message_packet("first");
        expected.extend(build_message_packet("second"));

        assert_eq!(enc.take(), expected);
    }

    #[test]
    fn taken_packets_are_not_repeated() {
        let mut enc = PacketEncoder::with_capacity(256);

        enc.write_packet(&MessageC2s::new("one"));
        let first = enc.take();

        enc.write_packet(&MessageC2s::new("two"));
        enc.write_packet_bytes(&[0xab]);
        let second = enc.take();

        assert_eq!(first, build_message_packet("one"));
        assert_eq!(second.len(), 67);
        assert_eq!(second[66], 0xab);
    }

    #[test]
    fn writer_sends_whole_packets() {
        let mut writer = PacketWriter::new(Vec::new());

        fn send_greeting(mut sink: impl WritePacket) {
            sink.write_packet(&MessageC2s::new("hey"));
        }

        writer.write_packet_fallible(&set_block()).unwrap();
        send_greeting(&mut writer);
        writer.flush().unwrap();

        let mut expected = build_set_block_packet(4, 5, 6, SetBlockMode::Create, 20);
        expected.extend(build_message_packet("hey"));

        assert_eq!(writer.into_inner(), expected);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_reports_io_errors() {
        let mut writer = PacketWriter::new(BrokenPipe);

        let err = writer
            .write_packet_fallible(&MessageC2s::new("lost"))
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to write 66 bytes of 'MessageC2s'");
        assert_eq!(
            err.root_cause().downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::BrokenPipe)
        );

        // Logged and dropped.
        writer.write_packet(&MessageC2s::new("lost"));
        writer.write_packet_bytes(&[1, 2, 3]);
    }
}
