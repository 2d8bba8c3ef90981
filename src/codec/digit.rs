//! Hex digit classification.

use crate::foundation::config::INVALID_NIBBLE;

/// Lookup table mapping every byte to its nibble value, or
/// [`INVALID_NIBBLE`] for bytes outside `[0-9a-fA-F]`.
pub const HEX_TABLE: &[u8; 256] = &{
    let mut buf = [INVALID_NIBBLE; 256];
    let mut i: u8 = 0;
    loop {
        buf[i as usize] = match i {
            b'0'..=b'9' => i - b'0',
            b'a'..=b'f' => i - b'a' + 10,
            b'A'..=b'F' => i - b'A' + 10,
            _ => INVALID_NIBBLE,
        };
        if i == u8::MAX {
            break buf;
        }
        i += 1;
    }
};

/// Convert a single ASCII hex character to its 4-bit value.
#[inline]
pub const fn hex_to_num(c: u8) -> Option<u8> {
    match HEX_TABLE[c as usize] {
        INVALID_NIBBLE => None,
        n => Some(n),
    }
}
