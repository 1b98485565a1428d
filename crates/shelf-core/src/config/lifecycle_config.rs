//! Grace and retention window configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PolicyError, PolicyResult};
use crate::lifecycle::{self, LifecycleClock, GRACE_PERIOD_DAYS, RETENTION_WINDOW_DAYS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub grace_period_days: i64,
    pub retention_window_days: i64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            grace_period_days: GRACE_PERIOD_DAYS,
            retention_window_days: RETENTION_WINDOW_DAYS,
        }
    }
}

impl LifecycleConfig {
    pub fn validate(&self) -> PolicyResult<()> {
        if self.grace_period_days < 0 {
            return Err(PolicyError::Config(format!(
                "grace period must not be negative, got {} days",
                self.grace_period_days
            )));
        }
        LifecycleClock::with_retention_days(self.retention_window_days).map(|_| ())
    }

    /// Clock using the configured retention window.
    pub fn clock(&self) -> PolicyResult<LifecycleClock> {
        LifecycleClock::with_retention_days(self.retention_window_days)
    }

    /// Grace deadline for a cancellation or deletion at `triggered_at`.
    pub fn grace_deadline_from(&self, triggered_at: DateTime<Utc>) -> DateTime<Utc> {
        lifecycle::grace_deadline_from(triggered_at, self.grace_period_days)
    }
}
