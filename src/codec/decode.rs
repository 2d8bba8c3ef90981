//! Raw hex decoding routine shared by every entry point.
//!
//! The routine is deliberately permissive about lengths: it never fails
//! because input and output disagree in size, and it tolerates an odd
//! number of digits. Entry points in [`literal`](super::literal) and
//! [`string`](super::string) reject those cases before calling it.

use crate::codec::digit::hex_to_num;
use crate::foundation::config::{NIBBLE_BITS, SEPARATOR_QUOTE};
use crate::foundation::error::HexError;

/// Decode hex digit pairs from `input` into `out`, one byte per two digits.
///
/// Decoding stops as soon as either `input` or `out` is exhausted. Output
/// slots past the last decoded byte are left untouched, and input past the
/// end of `out` is neither read nor validated.
///
/// A high nibble overwrites its slot; the low nibble is OR-ed into it. When
/// the input ends on a high nibble the slot keeps that half byte (low nibble
/// zero) and is not counted as written.
///
/// When `ignore_separator` is set, `'` is skipped without taking a nibble
/// slot. Otherwise it fails like any other non-hex byte.
///
/// Returns the number of complete bytes written.
pub const fn hex_to_bytes(
    input: &[u8],
    out: &mut [u8],
    ignore_separator: bool,
) -> Result<usize, HexError> {
    let separator = if ignore_separator { Some(SEPARATOR_QUOTE) } else { None };
    decode_skipping(input, out, separator)
}

/// [`hex_to_bytes`] with an explicit separator byte to skip, if any.
pub(crate) const fn decode_skipping(
    input: &[u8],
    out: &mut [u8],
    separator: Option<u8>,
) -> Result<usize, HexError> {
    let mut s = 0;
    let mut o = 0;
    let mut high = true;

    // for loops are not allowed in const fn.
    while s < input.len() && o < out.len() {
        let c = input[s];
        let index = s;
        s += 1;
        if let Some(sep) = separator {
            if c == sep {
                continue;
            }
        }

        let n = match hex_to_num(c) {
            Some(n) => n,
            None => return Err(HexError::InvalidDigit { byte: c, index }),
        };
        if high {
            out[o] = n << NIBBLE_BITS;
        } else {
            out[o] |= n;
            o += 1;
        }
        high = !high;
    }
    Ok(o)
}

/// Decode into a fresh zeroed array of length `N`.
///
/// Same permissive length rules as [`hex_to_bytes`].
pub const fn hex_to_array<const N: usize>(
    input: &[u8],
    ignore_separator: bool,
) -> Result<[u8; N], HexError> {
    let mut a = [0u8; N];
    match hex_to_bytes(input, &mut a, ignore_separator) {
        Ok(_) => Ok(a),
        Err(e) => Err(e),
    }
}

/// [`hex_to_array`] with an explicit separator byte to skip, if any.
pub(crate) const fn decode_array_skipping<const N: usize>(
    input: &[u8],
    separator: Option<u8>,
) -> Result<[u8; N], HexError> {
    let mut a = [0u8; N];
    match decode_skipping(input, &mut a, separator) {
        Ok(_) => Ok(a),
        Err(e) => Err(e),
    }
}
