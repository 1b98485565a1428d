pub mod lifecycle_config;
pub mod logging_config;

use serde::{Deserialize, Serialize};

use crate::errors::{PolicyError, PolicyResult};

pub use lifecycle_config::LifecycleConfig;
pub use logging_config::LoggingConfig;

/// Top-level configuration for the policy engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShelfConfig {
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
}

impl ShelfConfig {
    /// Load config from a TOML string, falling back to defaults for missing
    /// fields, then validate it.
    pub fn from_toml(toml_str: &str) -> PolicyResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| PolicyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PolicyResult<()> {
        self.lifecycle.validate()
    }
}
