//! Error taxonomy shared by every entry point.

use thiserror::Error;

/// Reasons a hex conversion can fail.
///
/// The raw decoding routine only ever reports [`HexError::InvalidDigit`];
/// the remaining variants come from entry-point validation, which runs
/// before any byte is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum HexError {
    /// A byte outside `[0-9a-fA-F]` was met while decoding. Separators land
    /// here too when the entry point does not skip them.
    #[error("invalid hex character {byte:#04x} at index {index}, expected [0-9a-fA-F]")]
    InvalidDigit { byte: u8, index: usize },

    /// A literal token does not start with `0x` or `0X`.
    #[error("requires prefix '0x'")]
    MissingPrefix,

    /// The digit count, after prefix and separators are removed, is odd.
    #[error("missing low byte: {digits} hex digits is an odd count")]
    OddDigitCount { digits: usize },

    /// The input holds a different number of bytes than the target array.
    #[error("expected {expected} bytes of hex input, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl HexError {
    /// Abort const evaluation with a message naming the failure.
    ///
    /// Used by the literal macros so a malformed literal stops compilation.
    /// Const panics only accept fixed messages, so the variant's fields are
    /// not part of it.
    pub const fn panic(self) -> ! {
        match self {
            HexError::InvalidDigit { .. } => {
                panic!("invalid hex character, expected [0-9a-fA-F]")
            }
            HexError::MissingPrefix => panic!("requires prefix '0x'"),
            HexError::OddDigitCount { .. } => panic!("missing low byte"),
            HexError::LengthMismatch { .. } => {
                panic!("hex input length does not match the array length")
            }
        }
    }
}
