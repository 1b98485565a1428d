//! Tracing setup for hosts embedding the policy engine.
//!
//! The library itself only emits events; installing a subscriber is the
//! host's call. `SHELF_LOG` overrides the configured filter.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "SHELF_LOG";

/// Install a global fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let (filter, fell_back) = match EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
    {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed && fell_back {
        ::tracing::warn!(level = %config.level, "invalid log filter, using info");
    }
    installed
}
