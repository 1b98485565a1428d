//! Entitlement evaluator tests.

use shelf_core::entitlements::{
    compute_overage, format_bytes, EntitlementSnapshot, LimitKind, Overage, PlanLimits,
    UploadCheck, Usage,
};

const MB: u64 = 1024 * 1024;

fn starter_limits() -> PlanLimits {
    PlanLimits {
        models: 10,
        storage_bytes: 100 * MB,
        members: 3,
    }
}

#[test]
fn model_overage_needs_action() {
    let overage = compute_overage(12, 10, 5, 10);
    assert_eq!(
        overage,
        Overage {
            over_model_count: 2,
            storage_overage: 0,
            needs_action: true,
        }
    );
}

#[test]
fn within_limits_needs_no_action() {
    for (models, storage) in [(0, 0), (5, 5), (10, 10)] {
        let overage = compute_overage(models, 10, storage, 10);
        assert_eq!(overage, Overage::default());
        assert!(!overage.needs_action);
    }
}

#[test]
fn storage_overage_alone_needs_action() {
    let overage = compute_overage(3, 10, 150 * MB, 100 * MB);
    assert_eq!(overage.over_model_count, 0);
    assert_eq!(overage.storage_overage, 50 * MB);
    assert!(overage.needs_action);
    assert_eq!(
        overage.remediation(),
        vec!["Free up 50 MB of storage to stay within your plan"]
    );
}

#[test]
fn remediation_lists_both_limits() {
    let overage = compute_overage(15, 10, 101 * MB, 100 * MB);
    assert_eq!(
        overage.remediation(),
        vec![
            "Remove 5 models to stay within your plan".to_string(),
            "Free up 1 MB of storage to stay within your plan".to_string(),
        ]
    );
}

#[test]
fn snapshot_overage_matches_free_function() {
    let snapshot = EntitlementSnapshot::new(
        Usage {
            models: 12,
            storage_bytes: 120 * MB,
            members: 5,
        },
        starter_limits(),
    );
    assert_eq!(snapshot.overage(), compute_overage(12, 10, 120 * MB, 100 * MB));
    assert_eq!(snapshot.over_member_count(), 2);
    assert_eq!(
        snapshot.exceeded_limits(),
        vec![LimitKind::Models, LimitKind::Storage, LimitKind::Members]
    );
}

#[test]
fn upload_blocked_at_model_limit() {
    let snapshot = EntitlementSnapshot::new(
        Usage {
            models: 10,
            storage_bytes: 0,
            members: 1,
        },
        starter_limits(),
    );
    assert_eq!(
        snapshot.check_upload(1),
        UploadCheck::Blocked {
            limit: LimitKind::Models
        }
    );
}

#[test]
fn upload_landing_on_storage_limit_is_allowed() {
    let snapshot = EntitlementSnapshot::new(
        Usage {
            models: 2,
            storage_bytes: 90 * MB,
            members: 1,
        },
        starter_limits(),
    );
    assert!(snapshot.check_upload(10 * MB).is_allowed());
    assert_eq!(
        snapshot.check_upload(10 * MB + 1),
        UploadCheck::Blocked {
            limit: LimitKind::Storage
        }
    );
}

#[test]
fn member_invites_stop_at_limit() {
    let mut usage = Usage {
        models: 0,
        storage_bytes: 0,
        members: 2,
    };
    assert!(EntitlementSnapshot::new(usage, starter_limits()).can_invite_member());
    usage.members = 3;
    let full = EntitlementSnapshot::new(usage, starter_limits());
    assert!(!full.can_invite_member());
    assert!(full.exceeded_limits().is_empty());
}

#[test]
fn snapshot_deserializes_from_json() {
    let snapshot: EntitlementSnapshot = serde_json::from_value(serde_json::json!({
        "usage": { "models": 4, "storage_bytes": 2048, "members": 1 },
        "limits": { "models": 3, "storage_bytes": 1024, "members": 1 }
    }))
    .unwrap();
    let overage = snapshot.overage();
    assert_eq!(overage.over_model_count, 1);
    assert_eq!(overage.storage_overage, 1024);
    assert_eq!(format_bytes(overage.storage_overage), "1 KB");
}
