//! Fixed-width text slots.
//!
//! Every string in the Classic protocol occupies exactly [`STRING_LEN`] bytes.
//! Text is written one byte per character, left-justified, and padded on the
//! right with spaces. Some servers reject null padding even though the vanilla
//! client accepts it, so spaces are always used here.
//!
//! Encoding never fails. Text longer than the slot is cut off, and characters
//! outside of ASCII are written as `?`.

use bytes::BufMut;

use crate::{Encode, STRING_LEN};

/// The byte used to fill the unused tail of a text slot.
pub const PAD_BYTE: u8 = b' ';

/// The byte written in place of a character that has no ASCII representation.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// A borrowed string which is encoded as an `N` byte text slot.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct FixedString<'a, const N: usize = STRING_LEN>(pub &'a str);

impl<'a, const N: usize> FixedString<'a, N> {
    /// Returns the part of the string that fits in the slot.
    pub fn visible(&self) -> &'a str {
        truncate_chars(self.0, N)
    }

    /// Returns `true` if some characters of the string do not fit in the slot.
    pub fn is_truncated(&self) -> bool {
        self.0.chars().nth(N).is_some()
    }
}

impl<'a, const N: usize> From<&'a str> for FixedString<'a, N> {
    fn from(s: &'a str) -> Self {
        Self(s)
    }
}

impl<const N: usize> Encode for FixedString<'_, N> {
    const ENCODED_LEN: usize = N;

    fn encode(&self, buf: &mut impl BufMut) {
        write_fixed_text(self.0, N, buf);
    }
}

/// Encodes `s` into a text slot of exactly `width` bytes.
///
/// ```
/// use classic_protocol::fixed_string::encode_fixed_text;
///
/// let slot = encode_fixed_text("hi", 4);
/// assert_eq!(slot, b"hi  ");
///
/// let slot = encode_fixed_text("too long", 3);
/// assert_eq!(slot, b"too");
/// ```
pub fn encode_fixed_text(s: &str, width: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(width);
    write_fixed_text(s, width, &mut buf);
    buf
}

/// Returns the longest prefix of `s` containing at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn write_fixed_text(s: &str, width: usize, buf: &mut impl BufMut) {
    let mut written = 0;

    for c in s.chars().take(width) {
        buf.put_u8(ascii_byte(c));
        written += 1;
    }

    buf.put_bytes(PAD_BYTE, width - written);
}

fn ascii_byte(c: char) -> u8 {
    if c.is_ascii() {
        c as u8
    } else {
        REPLACEMENT_BYTE
    }
}
