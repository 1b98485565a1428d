//! Rust ↔ JS conversions and error codes.

pub mod error_codes;
pub mod types;
