//! Stable error codes shared with the NAPI layer.

pub const UNKNOWN_ROLE: &str = "UNKNOWN_ROLE";
pub const UNKNOWN_PHASE: &str = "UNKNOWN_PHASE";
pub const FORBIDDEN: &str = "FORBIDDEN";
pub const INVALID_DEADLINES: &str = "INVALID_DEADLINES";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a machine-readable code.
pub trait ShelfErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, the format surfaced across the JS boundary.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
