//! NAPI-exported binding modules.

pub mod entitlements;
pub mod lifecycle;
pub mod permissions;
