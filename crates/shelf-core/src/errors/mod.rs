//! Error types for the policy engine.
//!
//! Authorization and lifecycle decisions are returned as values. Errors are
//! reserved for parse and validation boundaries, plus `require()` for callers
//! that want a denial as an `Err`.

pub mod error_code;
mod policy_error;

pub use error_code::ShelfErrorCode;
pub use policy_error::{PolicyError, PolicyResult};
