use crate::codec::literal::{
    bytes_literal, bytes_literal_with, check_prefix, literal_digit_count, literal_len,
    literal_len_with, sbytes_literal, sbytes_literal_with, token_body, token_separator,
};
use crate::foundation::error::HexError;
use crate::tests::ramp;

// ═══════════════════════════════════════════════════════════════════════
// Compile-time literals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bytes_literal() {
    const A: [u8; 16] = crate::bytes!(0x00112233445566778899aabbccddeeff);
    const _: () = assert!(A.len() == 16);
    const _: () = assert!(A[0x0] == 0x00);
    const _: () = assert!(A[0x7] == 0x77);
    const _: () = assert!(A[0xf] == 0xff);
    assert_eq!(A, ramp());
}

#[test]
fn test_bytes_literal_separator() {
    const A: [u8; 16] = crate::bytes!("0x00112233'44556677'8899aabb'ccddeeff");
    const B: [u8; 16] = crate::bytes!(0x00112233_44556677_8899aabb_ccddeeff);
    assert_eq!(A, ramp());
    assert_eq!(A, B);
}

#[test]
fn test_bytes_literal_uppercase() {
    const A: [u8; 16] = crate::bytes!("0X00112233445566778899AABBCCDDEEFF");
    const _: () = assert!(A[0xa] == 0xaa);
    assert_eq!(A, ramp());
}

#[test]
fn test_bytes_literal_uppercase_separator() {
    const A: [u8; 16] = crate::bytes!("0X00112233'44556677'8899AABB'CCDDEEFF");
    assert_eq!(A, ramp());
}

#[test]
fn test_sbytes_literal() {
    const A: [i8; 4] = crate::sbytes!(0x007f80ff);
    const _: () = assert!(A.len() == 4);
    assert_eq!(A, [0, 127, -128, -1]);
    const B: [i8; 2] = crate::sbytes!(0x80_7f);
    assert_eq!(B, [-128, 127]);
}

#[test]
fn test_literal_longer_than_u128() {
    const A: [u8; 20] = crate::bytes!("0x0011223344556677'8899aabbccddeeff'01234567");
    assert_eq!(&A[..16], &ramp());
    assert_eq!(&A[16..], &[0x01, 0x23, 0x45, 0x67]);
}

#[test]
fn test_literal_only_separators_is_empty() {
    const A: [u8; 0] = crate::bytes!("0x''");
    assert!(A.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_check_prefix() {
    assert_eq!(check_prefix(b"0x0"), Ok(()));
    assert_eq!(check_prefix(b"0X0"), Ok(()));
    assert_eq!(check_prefix(b"0x"), Err(HexError::MissingPrefix));
    assert_eq!(check_prefix(b""), Err(HexError::MissingPrefix));
    assert_eq!(check_prefix(b"1x00"), Err(HexError::MissingPrefix));
    assert_eq!(check_prefix(b"0b00"), Err(HexError::MissingPrefix));
    assert_eq!(check_prefix(b"x000"), Err(HexError::MissingPrefix));
}

#[test]
fn test_literal_digit_count() {
    assert_eq!(literal_digit_count(b"0x00112233"), Ok(8));
    assert_eq!(literal_digit_count(b"0x0011'2233"), Ok(8));
    assert_eq!(literal_digit_count(b"0x00''11'22'33"), Ok(8));
    assert_eq!(literal_digit_count(b"0x123"), Err(HexError::OddDigitCount { digits: 3 }));
    assert_eq!(literal_digit_count(b"0x12'3"), Err(HexError::OddDigitCount { digits: 3 }));
    assert_eq!(literal_digit_count(b"00112233"), Err(HexError::MissingPrefix));
}

#[test]
fn test_underscore_counts_as_digit_in_string_tokens() {
    assert_eq!(literal_digit_count(b"0x00_11"), Err(HexError::OddDigitCount { digits: 5 }));
    assert_eq!(literal_digit_count(b"0x00_112"), Ok(6));
}

#[test]
fn test_literal_len_with_underscore() {
    assert_eq!(literal_len_with(b"0x0011_2233", b'_'), Ok(4));
    assert_eq!(literal_len_with(b"0x0011_223", b'_'), Err(HexError::OddDigitCount { digits: 7 }));
    assert_eq!(literal_len_with(b"0x0011'2233", b'_'), Err(HexError::OddDigitCount { digits: 9 }));
}

#[test]
fn test_prefix_checked_before_digit_count() {
    assert_eq!(literal_digit_count(b"123"), Err(HexError::MissingPrefix));
}

#[test]
fn test_literal_len() {
    assert_eq!(literal_len(b"0x00112233'44556677"), Ok(8));
    assert_eq!(literal_len(b"0x"), Err(HexError::MissingPrefix));
}

// ═══════════════════════════════════════════════════════════════════════
// Runtime decoding
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bytes_literal_runtime_matches_macro() {
    const A: [u8; 4] = crate::bytes!("0xdead'BEEF");
    assert_eq!(bytes_literal::<4>(b"0xdead'BEEF"), Ok(A));
}

#[test]
fn test_bytes_literal_invalid_digit_index_includes_prefix() {
    assert_eq!(
        bytes_literal::<2>(b"0x12'g4"),
        Err(HexError::InvalidDigit { byte: b'g', index: 5 })
    );
}

#[test]
fn test_bytes_literal_length_mismatch() {
    assert_eq!(
        bytes_literal::<3>(b"0x1234"),
        Err(HexError::LengthMismatch { expected: 3, found: 2 })
    );
}

#[test]
fn test_bytes_literal_rejects_odd_before_decoding() {
    assert_eq!(bytes_literal::<1>(b"0xzz1"), Err(HexError::OddDigitCount { digits: 3 }));
}

#[test]
fn test_bytes_literal_rejects_underscore() {
    assert_eq!(
        bytes_literal::<3>(b"0x12_345"),
        Err(HexError::InvalidDigit { byte: b'_', index: 4 })
    );
}

#[test]
fn test_bytes_literal_with_underscore() {
    assert_eq!(bytes_literal_with::<4>(b"0x0011_2233", b'_'), Ok([0x00, 0x11, 0x22, 0x33]));
    assert_eq!(
        bytes_literal_with::<2>(b"0x12'34_", b'_'),
        Err(HexError::OddDigitCount { digits: 5 })
    );
    assert_eq!(
        bytes_literal_with::<3>(b"0x12'345", b'_'),
        Err(HexError::InvalidDigit { byte: b'\'', index: 4 })
    );
    assert_eq!(sbytes_literal_with::<2>(b"0x80_7f", b'_'), Ok([-128, 127]));
}

#[test]
fn test_sbytes_literal_runtime() {
    assert_eq!(sbytes_literal::<2>(b"0X80'7F"), Ok([-128, 127]));
    assert_eq!(sbytes_literal::<2>(b"807F"), Err(HexError::MissingPrefix));
}

#[test]
fn test_token_body() {
    assert_eq!(token_body("\"0x00'11\""), b"0x00'11");
    assert_eq!(token_body("0x0011_2233"), b"0x0011_2233");
    assert_eq!(token_body("\"\""), b"");
    assert_eq!(token_body("\""), b"\"");
}

#[test]
fn test_token_separator() {
    assert_eq!(token_separator("\"0x00'11\""), b'\'');
    assert_eq!(token_separator("0x0011_2233"), b'_');
    assert_eq!(token_separator(stringify!(0x00_ff)), b'_');
    assert_eq!(token_separator(stringify!("0x00'ff")), b'\'');
}

#[test]
fn test_stringify_keeps_integer_token_text() {
    assert_eq!(token_body(stringify!(0x00_ff)), b"0x00_ff");
    assert_eq!(token_body(stringify!("0x00'ff")), b"0x00'ff");
}
