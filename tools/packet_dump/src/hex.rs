use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Formats `bytes` as rows of sixteen hex bytes, prefixed with the offset of
/// the row and followed by the printable ASCII characters.
pub(crate) fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();

    for (row, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let _ = write!(out, "{:08x} ", row * BYTES_PER_LINE);

        for b in chunk {
            let _ = write!(out, " {b:02x}");
        }

        for _ in chunk.len()..BYTES_PER_LINE {
            out.push_str("   ");
        }

        out.push_str("  |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_and_partial_rows() {
        let bytes: Vec<u8> = (0x30..0x30 + 20).collect();

        assert_eq!(
            hex_dump(&bytes),
            "00000000  30 31 32 33 34 35 36 37 38 39 3a 3b 3c 3d 3e 3f  |0123456789:;<=>?|\n\
             00000010  40 41 42 43                                      |@ABC|\n"
        );
    }

    #[test]
    fn unprintable_bytes_are_dots() {
        assert_eq!(
            hex_dump(&[0x00, 0x07, b' ', 0xff]),
            "00000000  00 07 20 ff                                      |.. .|\n"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(hex_dump(&[]), "");
    }
}
