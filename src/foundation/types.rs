//! Owned fixed-size byte array with hex parsing and formatting.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::str::FromStr;

use crate::codec::encode::HexDisplay;
use crate::codec::literal::bytes_literal;
use crate::codec::string::{as_signed, to_bytes};
use crate::foundation::error::HexError;

/// `N` bytes decoded from, and displayed as, hex.
///
/// Parsing through [`FromStr`] follows the string form: exactly `2 * N`
/// digits, no prefix, no separators. [`HexBytes::parse_literal`] follows
/// the literal form instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> HexBytes<N> {
    /// Decode a bare hex digit string.
    pub const fn from_hex(s: &str) -> Result<Self, HexError> {
        match to_bytes::<N>(s) {
            Ok(a) => Ok(HexBytes(a)),
            Err(e) => Err(e),
        }
    }

    /// Decode a `0x`-prefixed token that may contain `'` separators.
    pub const fn parse_literal(token: &str) -> Result<Self, HexError> {
        match bytes_literal::<N>(token.as_bytes()) {
            Ok(a) => Ok(HexBytes(a)),
            Err(e) => Err(e),
        }
    }

    pub const fn into_inner(self) -> [u8; N] {
        self.0
    }

    /// The same bits as two's-complement `i8`s.
    pub const fn as_signed(&self) -> [i8; N] {
        as_signed(self.0)
    }
}

impl<const N: usize> Default for HexBytes<N> {
    fn default() -> Self {
        HexBytes([0u8; N])
    }
}

impl<const N: usize> From<[u8; N]> for HexBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        HexBytes(bytes)
    }
}

impl<const N: usize> From<HexBytes<N>> for [u8; N] {
    fn from(bytes: HexBytes<N>) -> Self {
        bytes.0
    }
}

impl<const N: usize> Deref for HexBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for HexBytes<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> AsRef<[u8]> for HexBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> FromStr for HexBytes<N> {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).map_err(|e| {
            log_rejected(e, s.len());
            e
        })
    }
}

impl<const N: usize> fmt::Display for HexBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexDisplay(&self.0), f)
    }
}

impl<const N: usize> fmt::LowerHex for HexBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if f.alternate() { "0x" } else { "" };
        HexDisplay(&self.0).write_padded(f, prefix, fmt::Alignment::Right)
    }
}

impl<const N: usize> fmt::Debug for HexBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBytes({})", HexDisplay(&self.0))
    }
}

/// Report input rejected on a runtime-only path.
#[inline]
pub(crate) fn log_rejected(error: HexError, input_len: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(%error, input_len, "rejected hex input");
    #[cfg(not(feature = "tracing"))]
    let _ = (error, input_len);
}
