//! Entitlement evaluator — current usage against a plan's limits.
//!
//! Pure classification over a snapshot supplied by the usage-metering side.
//! Nothing here sends notices or changes the plan; callers turn an [`Overage`]
//! into cancellation-notice content or upload rejections.

use serde::{Deserialize, Serialize};

/// Limits granted by a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanLimits {
    pub models: u64,
    pub storage_bytes: u64,
    pub members: u64,
}

/// Current consumption of an organization or account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    pub models: u64,
    pub storage_bytes: u64,
    pub members: u64,
}

/// Which limit a check tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitKind {
    Models,
    Storage,
    Members,
}

/// Amount by which usage exceeds the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overage {
    pub over_model_count: u64,
    /// Raw byte count; see [`format_bytes`] for display.
    pub storage_overage: u64,
    pub needs_action: bool,
}

impl Overage {
    /// Lines for a "stay within your plan" notice. Empty when nothing is over.
    pub fn remediation(&self) -> Vec<String> {
        let mut steps = Vec::new();
        if self.over_model_count > 0 {
            let noun = if self.over_model_count == 1 { "model" } else { "models" };
            steps.push(format!(
                "Remove {} {} to stay within your plan",
                self.over_model_count, noun
            ));
        }
        if self.storage_overage > 0 {
            steps.push(format!(
                "Free up {} of storage to stay within your plan",
                format_bytes(self.storage_overage)
            ));
        }
        steps
    }
}

/// Overage for the two limits that gate content.
pub fn compute_overage(
    models_used: u64,
    models_limit: u64,
    storage_used: u64,
    storage_limit: u64,
) -> Overage {
    let over_model_count = models_used.saturating_sub(models_limit);
    let storage_overage = storage_used.saturating_sub(storage_limit);
    Overage {
        over_model_count,
        storage_overage,
        needs_action: over_model_count > 0 || storage_overage > 0,
    }
}

/// Outcome of checking whether one more model of a given size fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadCheck {
    Allowed,
    Blocked { limit: LimitKind },
}

impl UploadCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Usage and limits as of one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitlementSnapshot {
    pub usage: Usage,
    pub limits: PlanLimits,
}

impl EntitlementSnapshot {
    pub fn new(usage: Usage, limits: PlanLimits) -> Self {
        Self { usage, limits }
    }

    pub fn overage(&self) -> Overage {
        compute_overage(
            self.usage.models,
            self.limits.models,
            self.usage.storage_bytes,
            self.limits.storage_bytes,
        )
    }

    pub fn over_member_count(&self) -> u64 {
        self.usage.members.saturating_sub(self.limits.members)
    }

    /// Every limit currently exceeded, in models/storage/members order.
    pub fn exceeded_limits(&self) -> Vec<LimitKind> {
        let overage = self.overage();
        let mut exceeded = Vec::new();
        if overage.over_model_count > 0 {
            exceeded.push(LimitKind::Models);
        }
        if overage.storage_overage > 0 {
            exceeded.push(LimitKind::Storage);
        }
        if self.over_member_count() > 0 {
            exceeded.push(LimitKind::Members);
        }
        exceeded
    }

    /// Whether one more model of `incoming_bytes` stays within the plan.
    /// Landing exactly on a limit is allowed.
    pub fn check_upload(&self, incoming_bytes: u64) -> UploadCheck {
        if self.usage.models >= self.limits.models {
            return UploadCheck::Blocked {
                limit: LimitKind::Models,
            };
        }
        let storage_after = self.usage.storage_bytes.saturating_add(incoming_bytes);
        if storage_after > self.limits.storage_bytes {
            return UploadCheck::Blocked {
                limit: LimitKind::Storage,
            };
        }
        UploadCheck::Allowed
    }

    pub fn can_invite_member(&self) -> bool {
        self.usage.members < self.limits.members
    }
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable size, base 1024, at most one decimal ("1.5 KB", "2 MB").
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // 1023.96 KB rounds to 1024.0; show it as 1 MB instead.
    let mut rounded = round_tenths(value);
    if rounded >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
        rounded = round_tenths(value);
    }

    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, BYTE_UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, BYTE_UNITS[unit])
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
        assert_eq!(format_bytes(2048 * 1024 * 1024 * 1024 * 1024), "2048 TB");
    }

    #[test]
    fn format_bytes_promotes_after_rounding() {
        assert_eq!(format_bytes(1024 * 1024 - 1), "1 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024 - 1), "1 GB");
        assert_eq!(format_bytes(1024 * 1024 * 1024 * 1024 - 1), "1 TB");
        assert_eq!(format_bytes(1024 * 1024 - 60), "1023.9 KB");
        assert_eq!(format_bytes(1023 * 1024), "1023 KB");
    }

    #[test]
    fn remediation_pluralizes() {
        let one = compute_overage(11, 10, 0, 10);
        assert_eq!(one.remediation(), vec!["Remove 1 model to stay within your plan"]);
        assert!(compute_overage(1, 10, 1, 10).remediation().is_empty());
    }
}
