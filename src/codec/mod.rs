//! Hex digit decoding and encoding.

pub mod decode;
pub mod digit;
pub mod encode;
pub mod literal;
pub mod string;
