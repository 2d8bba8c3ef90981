//! Literal-form entry point: `0x`-prefixed tokens with digit-group separators.
//!
//! The public functions treat `'` as the separator. Rust integer-literal
//! tokens cannot contain `'`, so the macros decode those with `_` instead,
//! through the `*_with` variants.
//!
//! These functions back the [`bytes!`](crate::bytes) and
//! [`sbytes!`](crate::sbytes) macros, which evaluate them inside `const`
//! items so a malformed literal is rejected at compile time. They are plain
//! `const fn`s and can be called at runtime as well.

use crate::codec::decode::decode_array_skipping;
use crate::codec::string::as_signed;
use crate::foundation::config::{
    DIGITS_PER_BYTE, PREFIX_LEN, PREFIX_MARKER_LOWER, PREFIX_MARKER_UPPER, PREFIX_ZERO,
    SEPARATOR_QUOTE, SEPARATOR_UNDERSCORE,
};
use crate::foundation::error::HexError;

/// Check that `token` starts with `0x` / `0X` and has at least one more
/// character after it.
pub const fn check_prefix(token: &[u8]) -> Result<(), HexError> {
    if token.len() <= PREFIX_LEN {
        return Err(HexError::MissingPrefix);
    }
    if token[0] != PREFIX_ZERO {
        return Err(HexError::MissingPrefix);
    }
    if token[1] != PREFIX_MARKER_LOWER && token[1] != PREFIX_MARKER_UPPER {
        return Err(HexError::MissingPrefix);
    }
    Ok(())
}

/// Validate a literal token and return its hex digit count.
///
/// The count excludes the prefix and every `'` separator. Digits themselves
/// are not inspected here; that happens while decoding.
pub const fn literal_digit_count(token: &[u8]) -> Result<usize, HexError> {
    digit_count_with(token, SEPARATOR_QUOTE)
}

const fn digit_count_with(token: &[u8], separator: u8) -> Result<usize, HexError> {
    if let Err(e) = check_prefix(token) {
        return Err(e);
    }

    let mut separators = 0;
    let mut i = PREFIX_LEN;
    while i < token.len() {
        if token[i] == separator {
            separators += 1;
        }
        i += 1;
    }

    let digits = token.len() - PREFIX_LEN - separators;
    if digits % DIGITS_PER_BYTE != 0 {
        return Err(HexError::OddDigitCount { digits });
    }
    Ok(digits)
}

/// Number of bytes a literal token decodes to.
pub const fn literal_len(token: &[u8]) -> Result<usize, HexError> {
    literal_len_with(token, SEPARATOR_QUOTE)
}

#[doc(hidden)]
pub const fn literal_len_with(token: &[u8], separator: u8) -> Result<usize, HexError> {
    match digit_count_with(token, separator) {
        Ok(digits) => Ok(digits / DIGITS_PER_BYTE),
        Err(e) => Err(e),
    }
}

/// Decode a literal token such as `0x00112233'44556677` into `[u8; N]`.
///
/// `N` must equal [`literal_len`] of the token, otherwise
/// [`HexError::LengthMismatch`] is returned.
pub const fn bytes_literal<const N: usize>(token: &[u8]) -> Result<[u8; N], HexError> {
    bytes_literal_with::<N>(token, SEPARATOR_QUOTE)
}

#[doc(hidden)]
pub const fn bytes_literal_with<const N: usize>(
    token: &[u8],
    separator: u8,
) -> Result<[u8; N], HexError> {
    let len = match literal_len_with(token, separator) {
        Ok(len) => len,
        Err(e) => return Err(e),
    };
    if len != N {
        return Err(HexError::LengthMismatch { expected: N, found: len });
    }

    let (_, digits) = token.split_at(PREFIX_LEN);
    match decode_array_skipping::<N>(digits, Some(separator)) {
        Ok(a) => Ok(a),
        // Report the offset within the whole token, prefix included.
        Err(HexError::InvalidDigit { byte, index }) => Err(HexError::InvalidDigit {
            byte,
            index: index + PREFIX_LEN,
        }),
        Err(e) => Err(e),
    }
}

/// Signed counterpart of [`bytes_literal`].
pub const fn sbytes_literal<const N: usize>(token: &[u8]) -> Result<[i8; N], HexError> {
    sbytes_literal_with::<N>(token, SEPARATOR_QUOTE)
}

#[doc(hidden)]
pub const fn sbytes_literal_with<const N: usize>(
    token: &[u8],
    separator: u8,
) -> Result<[i8; N], HexError> {
    match bytes_literal_with::<N>(token, separator) {
        Ok(a) => Ok(as_signed(a)),
        Err(e) => Err(e),
    }
}

/// Strip the quotes `stringify!` keeps around a string-literal token.
///
/// Integer-literal tokens such as `0x0011_2233` pass through unchanged.
#[doc(hidden)]
pub const fn token_body(stringified: &str) -> &[u8] {
    let bytes = stringified.as_bytes();
    if is_quoted(bytes) {
        let n = bytes.len();
        let (_, rest) = bytes.split_at(1);
        let (body, _) = rest.split_at(n - 2);
        body
    } else {
        bytes
    }
}

/// Separator of a stringified token: `'` inside a string literal, `_` in an
/// integer literal.
#[doc(hidden)]
pub const fn token_separator(stringified: &str) -> u8 {
    if is_quoted(stringified.as_bytes()) {
        SEPARATOR_QUOTE
    } else {
        SEPARATOR_UNDERSCORE
    }
}

const fn is_quoted(bytes: &[u8]) -> bool {
    let n = bytes.len();
    n >= 2 && bytes[0] == b'"' && bytes[n - 1] == b'"'
}
