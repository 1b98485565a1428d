//! Lifecycle bindings: `configure()` and `computePhase()`.

use napi_derive::napi;

use shelf_core::lifecycle::Deadlines;

use crate::conversions::error_codes::from_policy;
use crate::conversions::types::{parse_instant, JsLifecycleStatus};
use crate::runtime;

/// Install policy configuration from a TOML string.
///
/// Optional; defaults apply until called. May be called once per process,
/// later calls return ALREADY_CONFIGURED.
///
/// @param config_toml - e.g. `[lifecycle]\nretention_window_days = 30`
#[napi(js_name = "configure")]
pub fn configure(config_toml: String) -> napi::Result<()> {
    runtime::configure(&config_toml)
}

#[napi(js_name = "isConfigured")]
pub fn is_configured() -> bool {
    runtime::is_configured()
}

/// Lifecycle phase at `now_ms` for an optional grace deadline.
///
/// Both instants are epoch milliseconds. `now` is always passed in by the
/// caller so results are reproducible.
#[napi(js_name = "computePhase")]
pub fn compute_phase(now_ms: i64, grace_deadline_ms: Option<i64>) -> napi::Result<JsLifecycleStatus> {
    let rt = runtime::get()?;
    let now = parse_instant(now_ms)?;
    let grace = grace_deadline_ms.map(parse_instant).transpose()?;
    Ok(JsLifecycleStatus::from(&rt.clock.compute_phase(now, grace)))
}

/// Lifecycle phase at `now_ms` against a stored grace/retention pair.
///
/// Rejects a pair whose retention deadline is not after the grace deadline
/// with INVALID_DEADLINES.
#[napi(js_name = "computePhaseForDeadlines")]
pub fn compute_phase_for_deadlines(
    now_ms: i64,
    grace_deadline_ms: i64,
    retention_deadline_ms: i64,
) -> napi::Result<JsLifecycleStatus> {
    let now = parse_instant(now_ms)?;
    let deadlines = Deadlines::new(
        parse_instant(grace_deadline_ms)?,
        parse_instant(retention_deadline_ms)?,
    )
    .map_err(from_policy)?;
    Ok(JsLifecycleStatus::from(&deadlines.status_at(now)))
}

/// Grace deadline (epoch ms) for a cancellation or deletion at `triggered_at_ms`,
/// using the configured grace period.
#[napi(js_name = "graceDeadlineFrom")]
pub fn grace_deadline_from(triggered_at_ms: i64) -> napi::Result<i64> {
    let rt = runtime::get()?;
    let triggered_at = parse_instant(triggered_at_ms)?;
    Ok(rt
        .config
        .lifecycle
        .grace_deadline_from(triggered_at)
        .timestamp_millis())
}
