//! Error codes surfaced in `napi::Error` reasons.
//!
//! Policy errors reuse the codes from `shelf_core::errors::error_code`;
//! these cover failures that only exist at the binding layer.

use shelf_core::errors::ShelfErrorCode;

pub const INVALID_TIMESTAMP: &str = "INVALID_TIMESTAMP";
pub const INVALID_QUANTITY: &str = "INVALID_QUANTITY";
pub const ALREADY_CONFIGURED: &str = "ALREADY_CONFIGURED";

/// `[CODE] message` error for the JS side.
pub fn coded(code: &str, message: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(format!("[{code}] {message}"))
}

/// Convert a core error, keeping its code.
pub fn from_policy<E>(err: E) -> napi::Error
where
    E: ShelfErrorCode + std::fmt::Display,
{
    napi::Error::from_reason(err.coded_message())
}
