//! Types that cross the NAPI boundary.
//!
//! `#[napi(object)]` structs get generated TypeScript definitions.

use chrono::{DateTime, Utc};
use napi_derive::napi;

use shelf_core::entitlements::Overage;
use shelf_core::lifecycle::LifecycleStatus;
use shelf_core::roles::Role;

use super::error_codes::{self, coded, from_policy};

/// Lifecycle phase and countdown, returned to TypeScript.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsLifecycleStatus {
    /// `"none" | "grace" | "retention" | "expired"`.
    pub phase: String,
    pub days_remaining: u32,
    /// `"read_write" | "read_only" | "locked"`.
    pub access_mode: String,
    pub grace_deadline_ms: Option<i64>,
    pub retention_deadline_ms: Option<i64>,
}

impl From<&LifecycleStatus> for JsLifecycleStatus {
    fn from(status: &LifecycleStatus) -> Self {
        let access_mode = match status.access_mode() {
            shelf_core::lifecycle::AccessMode::ReadWrite => "read_write",
            shelf_core::lifecycle::AccessMode::ReadOnly => "read_only",
            shelf_core::lifecycle::AccessMode::Locked => "locked",
        };
        Self {
            phase: status.phase.as_str().to_string(),
            days_remaining: u32::try_from(status.days_remaining).unwrap_or(u32::MAX),
            access_mode: access_mode.to_string(),
            grace_deadline_ms: status.deadlines.map(|d| d.grace().timestamp_millis()),
            retention_deadline_ms: status.deadlines.map(|d| d.retention().timestamp_millis()),
        }
    }
}

/// Overage classification for cancellation notices.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsOverage {
    pub over_model_count: i64,
    pub storage_overage: i64,
    pub needs_action: bool,
    pub remediation: Vec<String>,
}

impl From<&Overage> for JsOverage {
    fn from(overage: &Overage) -> Self {
        Self {
            over_model_count: i64::try_from(overage.over_model_count).unwrap_or(i64::MAX),
            storage_overage: i64::try_from(overage.storage_overage).unwrap_or(i64::MAX),
            needs_action: overage.needs_action,
            remediation: overage.remediation(),
        }
    }
}

pub fn parse_role(value: &str) -> napi::Result<Role> {
    value.parse::<Role>().map_err(from_policy)
}

pub fn parse_instant(ms: i64) -> napi::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| coded(error_codes::INVALID_TIMESTAMP, format!("{ms} ms is out of range")))
}

/// JS numbers arrive as `i64`; counts and byte sizes must not be negative.
pub fn parse_quantity(name: &str, value: i64) -> napi::Result<u64> {
    u64::try_from(value).map_err(|_| {
        coded(
            error_codes::INVALID_QUANTITY,
            format!("{name} must not be negative, got {value}"),
        )
    })
}
