//! Configuration loading tests.

use chrono::{Duration, TimeZone, Utc};

use shelf_core::config::{LifecycleConfig, ShelfConfig};
use shelf_core::errors::ShelfErrorCode;
use shelf_core::lifecycle::{LifecycleClock, LifecyclePhase};

#[test]
fn empty_toml_gives_defaults() {
    let config = ShelfConfig::from_toml("").unwrap();
    assert_eq!(config, ShelfConfig::default());
    assert_eq!(config.lifecycle.grace_period_days, 7);
    assert_eq!(config.lifecycle.retention_window_days, 30);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.lifecycle.clock().unwrap(), LifecycleClock::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = ShelfConfig::from_toml(
        r#"
        [lifecycle]
        retention_window_days = 14

        [logging]
        level = "shelf_core=debug"
        "#,
    )
    .unwrap();
    assert_eq!(config.lifecycle.grace_period_days, 7);
    assert_eq!(config.lifecycle.retention_window_days, 14);
    assert_eq!(config.logging.level, "shelf_core=debug");

    let clock = config.lifecycle.clock().unwrap();
    assert_eq!(clock.retention_window(), Duration::days(14));
}

#[test]
fn non_positive_retention_window_is_rejected() {
    for bad in ["0", "-3"] {
        let toml = format!("[lifecycle]\nretention_window_days = {bad}\n");
        let err = ShelfConfig::from_toml(&toml).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}

#[test]
fn negative_grace_period_is_rejected() {
    let err = ShelfConfig::from_toml("[lifecycle]\ngrace_period_days = -1\n").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn malformed_toml_is_config_error() {
    let err = ShelfConfig::from_toml("[lifecycle\n").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn configured_grace_feeds_the_clock() {
    let config = LifecycleConfig {
        grace_period_days: 3,
        retention_window_days: 10,
    };
    let cancelled_at = Utc.with_ymd_and_hms(2026, 5, 10, 0, 0, 0).unwrap();
    let grace = config.grace_deadline_from(cancelled_at);
    assert_eq!(grace, cancelled_at + Duration::days(3));

    let clock = config.clock().unwrap();
    let status = clock.compute_phase(cancelled_at + Duration::days(1), Some(grace));
    assert_eq!(status.phase, LifecyclePhase::Grace);
    assert_eq!(status.days_remaining, 2);

    let status = clock.compute_phase(cancelled_at + Duration::days(14), Some(grace));
    assert_eq!(status.phase, LifecyclePhase::Expired);
}
