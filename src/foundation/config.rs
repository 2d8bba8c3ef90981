//! Constants for hex literal parsing.
//!
//! ## Accepted Forms
//!
//! | Form           | Prefix        | Separators  | Example                 |
//! |----------------|---------------|-------------|-------------------------|
//! | literal        | `0x` or `0X`  | `'`         | `"0x0011'2233"`         |
//! | integer token  | `0x` or `0X`  | `_`         | `0x0011_2233`           |
//! | string         | none          | none        | `"00112233"`            |

/// Number of characters in the `0x` / `0X` prefix of a literal token.
pub const PREFIX_LEN: usize = 2;

/// First character of the literal prefix.
pub const PREFIX_ZERO: u8 = b'0';

/// Lowercase prefix marker (`0x`).
pub const PREFIX_MARKER_LOWER: u8 = b'x';

/// Uppercase prefix marker (`0X`).
pub const PREFIX_MARKER_UPPER: u8 = b'X';

// ═══════════════════════════════════════════════════════════════════════
// DIGIT-GROUP SEPARATORS
// ═══════════════════════════════════════════════════════════════════════

/// Quote separator, as in `0x00112233'44556677`.
pub const SEPARATOR_QUOTE: u8 = b'\'';

/// Underscore separator, the digit separator of Rust numeric literals.
pub const SEPARATOR_UNDERSCORE: u8 = b'_';

// ═══════════════════════════════════════════════════════════════════════
// DIGITS
// ═══════════════════════════════════════════════════════════════════════

/// Number of hex digits per decoded byte.
pub const DIGITS_PER_BYTE: usize = 2;

/// Bits carried by one hex digit.
pub const NIBBLE_BITS: u32 = 4;

/// Marker in the digit lookup table for bytes that are not hex digits.
pub const INVALID_NIBBLE: u8 = 0xFF;

/// Lowercase alphabet used when encoding.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
