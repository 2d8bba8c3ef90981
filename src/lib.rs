//! Hex literals as fixed-size byte arrays, at compile time or at runtime.
//!
//! # Architecture
//!
//! | Entry point                   | Module              | Input                        |
//! |-------------------------------|---------------------|------------------------------|
//! | `bytes!` / `sbytes!`          | codec::literal      | `0x` token, `'`/`_` groups   |
//! | `to_bytes!` / `to_sbytes!`    | codec::string       | bare hex digits              |
//! | `to_bytes` / `to_sbytes`      | codec::string       | bare hex digits              |
//! | `hex_to_bytes`                | codec::decode       | raw routine, any lengths     |
//! | `HexBytes<N>`                 | foundation::types   | `FromStr`, `Display`, serde  |
//!
//! Every decoder is a `const fn`. The macros evaluate them inside `const`
//! items, so a malformed literal is a compile error and a well-formed one
//! costs nothing at runtime. Called directly, the same functions return
//! [`HexError`].
//!
//! ```
//! use bytes_literals::{bytes, sbytes, to_bytes};
//!
//! const KEY: [u8; 16] = bytes!("0x00112233'44556677'8899aabb'ccddeeff");
//! assert_eq!(KEY[0x7], 0x77);
//!
//! const SIGNED: [i8; 4] = sbytes!(0x007f80ff);
//! assert_eq!(SIGNED, [0, 127, -128, -1]);
//!
//! let runtime: [u8; 2] = to_bytes::<2>("beef").unwrap();
//! assert_eq!(runtime, [0xbe, 0xef]);
//! ```
//!
//! # Features
//!
//! - `serde`: hex-string (de)serialization for [`HexBytes`].
//! - `tracing`: debug events for input rejected by `FromStr` and serde.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod codec;
pub mod foundation;

#[cfg(feature = "serde")]
mod serde_impl;


pub use codec::decode::{hex_to_array, hex_to_bytes};
pub use codec::encode::{encode_hex, HexDisplay};
pub use codec::literal::{bytes_literal, literal_digit_count, literal_len, sbytes_literal};
pub use codec::string::{as_signed, to_bytes, to_sbytes};
pub use foundation::error::HexError;
pub use foundation::types::HexBytes;
