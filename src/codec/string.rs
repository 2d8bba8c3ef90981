//! String-to-bytes entry point: bare hex digits, no prefix, no separators.

use crate::codec::decode::hex_to_array;
use crate::foundation::config::DIGITS_PER_BYTE;
use crate::foundation::error::HexError;

/// Decode a string of hex digits into `[u8; N]`.
///
/// The input must be exactly `2 * N` digits long. A `0x` prefix or a
/// separator is not stripped and fails as [`HexError::InvalidDigit`].
///
/// ```
/// const KEY: [u8; 4] = match bytes_literals::to_bytes::<4>("deadBEEF") {
///     Ok(k) => k,
///     Err(e) => e.panic(),
/// };
/// assert_eq!(KEY, [0xde, 0xad, 0xbe, 0xef]);
/// ```
pub const fn to_bytes<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let found = match string_len(s) {
        Ok(found) => found,
        Err(e) => return Err(e),
    };
    if found != N {
        return Err(HexError::LengthMismatch { expected: N, found });
    }
    hex_to_array::<N>(s.as_bytes(), false)
}

/// Signed counterpart of [`to_bytes`]; bytes are reinterpreted as two's
/// complement.
pub const fn to_sbytes<const N: usize>(s: &str) -> Result<[i8; N], HexError> {
    match to_bytes::<N>(s) {
        Ok(a) => Ok(as_signed(a)),
        Err(e) => Err(e),
    }
}

/// Reinterpret every byte as a two's-complement `i8`, keeping the bits.
pub const fn as_signed<const N: usize>(bytes: [u8; N]) -> [i8; N] {
    let mut out = [0i8; N];
    let mut i = 0;
    while i < N {
        out[i] = bytes[i] as i8;
        i += 1;
    }
    out
}

/// Number of bytes a hex digit string decodes to.
#[doc(hidden)]
pub const fn string_len(s: &str) -> Result<usize, HexError> {
    let digits = s.len();
    if digits % DIGITS_PER_BYTE != 0 {
        return Err(HexError::OddDigitCount { digits });
    }
    Ok(digits / DIGITS_PER_BYTE)
}
