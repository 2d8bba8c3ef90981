//! Constants, error type and owned array type.

pub mod config;
pub mod error;
pub mod types;
