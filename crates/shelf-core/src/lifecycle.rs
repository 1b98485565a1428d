//! Lifecycle clock — grace and retention windows after a cancellation or
//! deletion event.
//!
//! The phase is never stored. It is recomputed from `(now, grace_deadline)`
//! on every query, so there is no transition event to miss.
//!
//! ```text
//!   none ──(trigger)──► grace ──(grace deadline)──► retention ──(retention deadline)──► expired
//!                       read-write                  read-only                           locked
//! ```
//!
//! A deadline instant belongs to the earlier phase. Remaining days round up,
//! so any positive remainder reports at least one day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PolicyError, PolicyResult};

/// Days an account stays read-write after the trigger.
pub const GRACE_PERIOD_DAYS: i64 = 7;
/// Days data stays recoverable after the grace deadline.
pub const RETENTION_WINDOW_DAYS: i64 = 30;

/// Where an account sits relative to a cancellation or deletion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LifecyclePhase {
    None,
    Grace,
    Retention,
    Expired,
}

/// What an account may do with its data in a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
    Locked,
}

impl LifecyclePhase {
    pub const ALL: [LifecyclePhase; 4] = [Self::None, Self::Grace, Self::Retention, Self::Expired];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grace => "grace",
            Self::Retention => "retention",
            Self::Expired => "expired",
        }
    }

    pub fn access_mode(self) -> AccessMode {
        match self {
            Self::None | Self::Grace => AccessMode::ReadWrite,
            Self::Retention => AccessMode::ReadOnly,
            Self::Expired => AccessMode::Locked,
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for LifecyclePhase {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for LifecyclePhase {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| PolicyError::UnknownPhase {
                value: s.to_string(),
            })
    }
}

/// Grace and retention deadlines.
///
/// `retention` is strictly after `grace`, except when a derived retention
/// deadline saturates at `DateTime::<Utc>::MAX_UTC` (see [`Deadlines::from_grace`]).
/// Deserialization goes through [`Deadlines::new`], so a stored pair with
/// bad ordering is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredDeadlines")]
pub struct Deadlines {
    grace: DateTime<Utc>,
    retention: DateTime<Utc>,
}

/// Unvalidated wire form of [`Deadlines`].
#[derive(Deserialize)]
struct StoredDeadlines {
    grace: DateTime<Utc>,
    retention: DateTime<Utc>,
}

impl TryFrom<StoredDeadlines> for Deadlines {
    type Error = PolicyError;

    fn try_from(stored: StoredDeadlines) -> Result<Self, Self::Error> {
        Self::new(stored.grace, stored.retention)
    }
}

impl Deadlines {
    /// Accept an externally supplied pair, rejecting `retention <= grace`.
    pub fn new(grace: DateTime<Utc>, retention: DateTime<Utc>) -> PolicyResult<Self> {
        if retention <= grace {
            return Err(PolicyError::InvalidDeadlines { grace, retention });
        }
        Ok(Self { grace, retention })
    }

    /// Derive the retention deadline by adding `window` to `grace`.
    ///
    /// `window` must be positive; [`LifecycleClock`] guarantees that for its
    /// own window. Saturates at the maximum representable instant, so a grace
    /// deadline within `window` of it yields `retention == MAX_UTC`, which may
    /// equal `grace`.
    pub fn from_grace(grace: DateTime<Utc>, window: Duration) -> Self {
        let retention = grace
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { grace, retention }
    }

    pub fn grace(&self) -> DateTime<Utc> {
        self.grace
    }

    pub fn retention(&self) -> DateTime<Utc> {
        self.retention
    }

    /// Phase and remaining whole days at `now` against these deadlines.
    pub fn status_at(&self, now: DateTime<Utc>) -> LifecycleStatus {
        let (phase, days_remaining) = if now <= self.grace {
            (LifecyclePhase::Grace, days_until(now, self.grace))
        } else if now <= self.retention {
            (LifecyclePhase::Retention, days_until(now, self.retention))
        } else {
            (LifecyclePhase::Expired, 0)
        };

        debug!(
            phase = phase.as_str(),
            days_remaining,
            grace_deadline = %self.grace,
            retention_deadline = %self.retention,
            "lifecycle phase computed"
        );

        LifecycleStatus {
            phase,
            days_remaining,
            deadlines: Some(*self),
        }
    }
}

/// Result of a phase computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifecycleStatus {
    pub phase: LifecyclePhase,
    pub days_remaining: u64,
    pub deadlines: Option<Deadlines>,
}

impl LifecycleStatus {
    fn none() -> Self {
        Self {
            phase: LifecyclePhase::None,
            days_remaining: 0,
            deadlines: None,
        }
    }

    pub fn access_mode(&self) -> AccessMode {
        self.phase.access_mode()
    }

    pub fn is_read_only(&self) -> bool {
        self.access_mode() != AccessMode::ReadWrite
    }

    /// True once the account has left normal operation (any phase but `none`).
    pub fn is_restricted(&self) -> bool {
        self.phase != LifecyclePhase::None
    }

    /// The deadline `days_remaining` counts down to, if any.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        let deadlines = self.deadlines?;
        match self.phase {
            LifecyclePhase::Grace => Some(deadlines.grace),
            LifecyclePhase::Retention => Some(deadlines.retention),
            LifecyclePhase::None | LifecyclePhase::Expired => None,
        }
    }
}

/// Phase calculator with a configurable retention window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleClock {
    retention_window: Duration,
}

impl LifecycleClock {
    /// Build a clock with a retention window of `days`. Rejects `days <= 0`.
    pub fn with_retention_days(days: i64) -> PolicyResult<Self> {
        let retention_window = Duration::try_days(days)
            .filter(|window| *window > Duration::zero())
            .ok_or_else(|| {
                PolicyError::Config(format!(
                    "retention window must be a positive number of days, got {days}"
                ))
            })?;
        Ok(Self { retention_window })
    }

    pub fn retention_window(&self) -> Duration {
        self.retention_window
    }

    /// Current phase and remaining whole days for `grace_deadline` at `now`.
    pub fn compute_phase(
        &self,
        now: DateTime<Utc>,
        grace_deadline: Option<DateTime<Utc>>,
    ) -> LifecycleStatus {
        let Some(grace) = grace_deadline else {
            return LifecycleStatus::none();
        };

        Deadlines::from_grace(grace, self.retention_window).status_at(now)
    }
}

impl Default for LifecycleClock {
    fn default() -> Self {
        Self {
            retention_window: Duration::days(RETENTION_WINDOW_DAYS),
        }
    }
}

/// [`LifecycleClock::compute_phase`] with the default retention window.
pub fn compute_phase(now: DateTime<Utc>, grace_deadline: Option<DateTime<Utc>>) -> LifecycleStatus {
    LifecycleClock::default().compute_phase(now, grace_deadline)
}

/// Whole days from `now` until `deadline`, rounded up at full (nanosecond)
/// precision. Zero once past.
pub fn days_until(now: DateTime<Utc>, deadline: DateTime<Utc>) -> u64 {
    let remaining = deadline.signed_duration_since(now);
    if remaining <= Duration::zero() {
        return 0;
    }
    let whole_days = remaining.num_days();
    let partial_day = remaining - Duration::days(whole_days) > Duration::zero();
    (whole_days + i64::from(partial_day)) as u64
}

/// Grace deadline for an event that happened at `triggered_at`.
pub fn grace_deadline_from(triggered_at: DateTime<Utc>, grace_days: i64) -> DateTime<Utc> {
    Duration::try_days(grace_days)
        .and_then(|grace| triggered_at.checked_add_signed(grace))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
