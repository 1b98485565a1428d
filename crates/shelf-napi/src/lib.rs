//! # shelf-napi
//!
//! NAPI-RS v3 bindings exposing the STL Shelf policy engine to the
//! TypeScript app. Route handlers and UI hooks call these instead of
//! re-implementing the rules.
//!
//! Roles cross the boundary as lowercase strings, instants as epoch
//! milliseconds, and errors as `[CODE] message` reasons.

pub mod bindings;
pub mod conversions;
pub mod runtime;
