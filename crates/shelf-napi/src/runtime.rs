//! Process-wide policy configuration — `OnceLock`, set at most once.
//!
//! `configure()` is optional. Until it is called, every binding uses
//! `ShelfConfig::default()`.

use std::sync::OnceLock;

use shelf_core::config::ShelfConfig;
use shelf_core::lifecycle::LifecycleClock;

use crate::conversions::error_codes::{self, coded, from_policy};

static CONFIG: OnceLock<ShelfConfig> = OnceLock::new();

/// Resolved runtime settings.
pub struct PolicyRuntime {
    pub config: ShelfConfig,
    pub clock: LifecycleClock,
}

/// Parse, validate and install the configuration. Fails if already set.
pub fn configure(config_toml: &str) -> napi::Result<()> {
    let config = ShelfConfig::from_toml(config_toml).map_err(from_policy)?;
    shelf_core::tracing::init_tracing(&config.logging);

    CONFIG.set(config).map_err(|_| {
        coded(
            error_codes::ALREADY_CONFIGURED,
            "policy engine already configured",
        )
    })?;
    tracing::info!("policy engine configured");
    Ok(())
}

pub fn is_configured() -> bool {
    CONFIG.get().is_some()
}

/// Current settings, falling back to defaults when unconfigured.
pub fn get() -> napi::Result<PolicyRuntime> {
    let config = CONFIG.get().cloned().unwrap_or_default();
    let clock = config.lifecycle.clock().map_err(from_policy)?;
    Ok(PolicyRuntime { config, clock })
}
