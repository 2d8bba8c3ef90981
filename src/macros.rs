//! Compile-time forms of the entry points.
//!
//! Every macro expands to `const` items, so validation and decoding run
//! during compilation and a malformed input is a compile error.

/// Decode a `0x`-prefixed hex literal into a `[u8; N]` at compile time.
///
/// The token may be a string literal, which allows `'` separators and the
/// `0X` prefix, or a Rust integer literal using `_` separators. Each form
/// accepts only its own separator.
///
/// ```
/// use bytes_literals::bytes;
///
/// const A: [u8; 4] = bytes!("0x0011'2233");
/// const B: [u8; 4] = bytes!(0x0011_2233);
/// assert_eq!(A, [0x00, 0x11, 0x22, 0x33]);
/// assert_eq!(A, B);
/// ```
///
/// An odd digit count does not compile:
///
/// ```compile_fail
/// let _ = bytes_literals::bytes!("0x123");
/// ```
///
/// Neither does a token without the prefix:
///
/// ```compile_fail
/// let _ = bytes_literals::bytes!("1234");
/// ```
///
/// Nor a non-hex digit:
///
/// ```compile_fail
/// let _ = bytes_literals::bytes!("0xzz");
/// ```
///
/// Nor `_` inside a string-literal token:
///
/// ```compile_fail
/// let _ = bytes_literals::bytes!("0x12_345");
/// ```
#[macro_export]
macro_rules! bytes {
    ($token:tt) => {{
        const TOKEN: &[u8] = $crate::codec::literal::token_body(::core::stringify!($token));
        const SEP: u8 = $crate::codec::literal::token_separator(::core::stringify!($token));
        const LEN: usize = match $crate::codec::literal::literal_len_with(TOKEN, SEP) {
            ::core::result::Result::Ok(len) => len,
            ::core::result::Result::Err(e) => e.panic(),
        };
        const BYTES: [u8; LEN] = match $crate::codec::literal::bytes_literal_with::<LEN>(TOKEN, SEP) {
            ::core::result::Result::Ok(bytes) => bytes,
            ::core::result::Result::Err(e) => e.panic(),
        };
        BYTES
    }};
}

/// Signed counterpart of [`bytes!`]: decodes into `[i8; N]`.
///
/// ```
/// const A: [i8; 4] = bytes_literals::sbytes!(0x007f80ff);
/// assert_eq!(A, [0, 127, -128, -1]);
/// ```
///
/// Validation matches [`bytes!`]:
///
/// ```compile_fail
/// let _ = bytes_literals::sbytes!("0x7f8");
/// ```
///
/// ```compile_fail
/// let _ = bytes_literals::sbytes!("0x7g");
/// ```
#[macro_export]
macro_rules! sbytes {
    ($token:tt) => {{
        const TOKEN: &[u8] = $crate::codec::literal::token_body(::core::stringify!($token));
        const SEP: u8 = $crate::codec::literal::token_separator(::core::stringify!($token));
        const LEN: usize = match $crate::codec::literal::literal_len_with(TOKEN, SEP) {
            ::core::result::Result::Ok(len) => len,
            ::core::result::Result::Err(e) => e.panic(),
        };
        const BYTES: [i8; LEN] = match $crate::codec::literal::sbytes_literal_with::<LEN>(TOKEN, SEP) {
            ::core::result::Result::Ok(bytes) => bytes,
            ::core::result::Result::Err(e) => e.panic(),
        };
        BYTES
    }};
}

/// Decode a constant string of bare hex digits into `[u8; len / 2]`.
///
/// Accepts any constant `&str` expression, including `concat!`.
///
/// ```
/// const SBOX_ROW: [u8; 16] = bytes_literals::to_bytes!("637c777bf26b6fc53001672bfed7ab76");
/// assert_eq!(SBOX_ROW[0], 0x63);
/// assert_eq!(SBOX_ROW[15], 0x76);
/// ```
///
/// A prefix is not stripped, so it does not compile:
///
/// ```compile_fail
/// let _ = bytes_literals::to_bytes!("0x00");
/// ```
///
/// Separators are not skipped either:
///
/// ```compile_fail
/// let _ = bytes_literals::to_bytes!("0'00");
/// ```
#[macro_export]
macro_rules! to_bytes {
    ($s:expr) => {{
        const S: &str = $s;
        const LEN: usize = match $crate::codec::string::string_len(S) {
            ::core::result::Result::Ok(len) => len,
            ::core::result::Result::Err(e) => e.panic(),
        };
        const BYTES: [u8; LEN] = match $crate::codec::string::to_bytes::<LEN>(S) {
            ::core::result::Result::Ok(bytes) => bytes,
            ::core::result::Result::Err(e) => e.panic(),
        };
        BYTES
    }};
}

/// Signed counterpart of [`to_bytes!`].
///
/// ```
/// const A: [i8; 2] = bytes_literals::to_sbytes!("80ff");
/// assert_eq!(A, [-128, -1]);
/// ```
///
/// ```compile_fail
/// let _ = bytes_literals::to_sbytes!("80f");
/// ```
///
/// ```compile_fail
/// let _ = bytes_literals::to_sbytes!("0x80");
/// ```
#[macro_export]
macro_rules! to_sbytes {
    ($s:expr) => {{
        const S: &str = $s;
        const LEN: usize = match $crate::codec::string::string_len(S) {
            ::core::result::Result::Ok(len) => len,
            ::core::result::Result::Err(e) => e.panic(),
        };
        const BYTES: [i8; LEN] = match $crate::codec::string::to_sbytes::<LEN>(S) {
            ::core::result::Result::Ok(bytes) => bytes,
            ::core::result::Result::Err(e) => e.panic(),
        };
        BYTES
    }};
}
