//! Implementations of [`Encode`](crate::Encode) on foreign types.
//!
//! Multi-byte integers are always written big-endian, whatever the host
//! platform is.

use bytes::BufMut;

use crate::Encode;

impl Encode for bool {
    const ENCODED_LEN: usize = 1;

    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_u8(u8::from(*self));
    }
}

impl Encode for u8 {
    const ENCODED_LEN: usize = 1;

    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_u8(*self);
    }

    fn encode_slice(slice: &[u8], buf: &mut impl BufMut) {
        buf.put_slice(slice);
    }
}

impl Encode for i8 {
    const ENCODED_LEN: usize = 1;

    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_i8(*self);
    }
}

impl Encode for i16 {
    const ENCODED_LEN: usize = 2;

    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_i16(*self);
    }
}

impl Encode for u16 {
    const ENCODED_LEN: usize = 2;

    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_u16(*self);
    }
}

/// Fixed-length arrays are encoded without any length prefix.
impl<T: Encode, const N: usize> Encode for [T; N] {
    const ENCODED_LEN: usize = T::ENCODED_LEN * N;

    fn encode(&self, buf: &mut impl BufMut) {
        T::encode_slice(self, buf);
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    const ENCODED_LEN: usize = T::ENCODED_LEN;

    fn encode(&self, buf: &mut impl BufMut) {
        (**self).encode(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_big_endian() {
        assert_eq!(0x0102_i16.encode_to_vec(), [0x01, 0x02]);
        assert_eq!((-2_i16).encode_to_vec(), [0xff, 0xfe]);
        assert_eq!(i16::MIN.encode_to_vec(), [0x80, 0x00]);
        assert_eq!(0xbeef_u16.encode_to_vec(), [0xbe, 0xef]);
        assert_eq!((-1_i8).encode_to_vec(), [0xff]);
    }

    #[test]
    fn arrays_have_no_prefix() {
        let arr: [i16; 3] = [1, 3, 2];
        assert_eq!(<[i16; 3]>::ENCODED_LEN, 6);
        assert_eq!(arr.encode_to_vec(), [0, 1, 0, 3, 0, 2]);
        assert_eq!([7_u8; 4].encode_to_vec(), [7, 7, 7, 7]);
    }

    #[test]
    fn references_encode_like_their_target() {
        let n = 300_i16;
        assert_eq!(<&i16 as Encode>::encode_to_vec(&&n), n.encode_to_vec());
        assert_eq!(<&i16>::ENCODED_LEN, 2);
    }
}
