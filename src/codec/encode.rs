//! Lowercase hex encoding, the inverse of the decoders.
//!
//! All operations write into caller buffers or a formatter; no heap allocation.

use core::fmt::{self, Alignment, Write};

use crate::foundation::config::{DIGITS_PER_BYTE, HEX_CHARS, NIBBLE_BITS};

/// Encode raw bytes as a lowercase hex string into `out`.
/// Returns the number of ASCII bytes written (always `input.len() * 2`),
/// or `None` if `out` is too small.
pub const fn encode_hex(input: &[u8], out: &mut [u8]) -> Option<usize> {
    let needed = input.len() * DIGITS_PER_BYTE;
    if needed > out.len() {
        return None;
    }
    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        out[i * DIGITS_PER_BYTE] = HEX_CHARS[(byte >> NIBBLE_BITS) as usize];
        out[i * DIGITS_PER_BYTE + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        i += 1;
    }
    Some(needed)
}

/// Formats a byte slice as lowercase hex without allocating.
///
/// Width, fill and alignment are honoured; the default alignment is left,
/// as for strings.
#[derive(Clone, Copy)]
pub struct HexDisplay<'a>(pub &'a [u8]);

impl HexDisplay<'_> {
    /// Write `prefix` and the digits, padded to the formatter's width.
    pub(crate) fn write_padded(
        &self,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        default_align: Alignment,
    ) -> fmt::Result {
        let len = prefix.len() + self.0.len() * DIGITS_PER_BYTE;
        let pad = f.width().map_or(0, |w| w.saturating_sub(len));
        let (before, after) = match f.align().unwrap_or(default_align) {
            Alignment::Left => (0, pad),
            Alignment::Right => (pad, 0),
            Alignment::Center => (pad / 2, pad - pad / 2),
        };
        let fill = f.fill();

        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(prefix)?;
        for &byte in self.0 {
            f.write_char(HEX_CHARS[(byte >> NIBBLE_BITS) as usize] as char)?;
            f.write_char(HEX_CHARS[(byte & 0x0f) as usize] as char)?;
        }
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_padded(f, "", Alignment::Left)
    }
}

impl fmt::Debug for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
