//! Authorization policy over the role lattice.
//!
//! Admin is a protected tier: only the owner creates, demotes or removes
//! admins. Deleting a model needs admin even for its author, while editing
//! does not.
//!
//! The `can_*` predicates are the primitive rules. [`authorize`] dispatches an
//! [`Action`] to them and reports what role would have been needed;
//! [`require`] turns a denial into a coded [`PolicyError::Forbidden`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PolicyError, PolicyResult};
use crate::roles::{at_least, Role};

/// Only the owner may promote, demote or remove admins.
pub fn can_manage_admins(actor: Role) -> bool {
    actor == Role::Owner
}

/// Admins and owners edit any model; members edit only their own.
pub fn can_edit_model(actor: Role, is_own_model: bool) -> bool {
    at_least(actor, Role::Admin) || is_own_model
}

/// Members may never delete, not even models they authored.
pub fn can_delete_model(actor: Role) -> bool {
    at_least(actor, Role::Admin)
}

pub fn can_access_org_settings(actor: Role) -> bool {
    at_least(actor, Role::Admin)
}

pub fn can_manage_team(actor: Role) -> bool {
    at_least(actor, Role::Admin)
}

/// Billing is owner-only; admins are excluded.
pub fn can_access_billing(actor: Role) -> bool {
    actor == Role::Owner
}

/// Any change that touches the admin tier, in either direction, is owner-only.
/// Other changes need at least admin.
pub fn can_change_role(actor: Role, target_current: Role, target_new: Role) -> bool {
    if target_current == Role::Admin || target_new == Role::Admin {
        return actor == Role::Owner;
    }
    at_least(actor, Role::Admin)
}

/// Owner removes anyone; admin removes members only.
pub fn can_remove_member(actor: Role, target: Role) -> bool {
    match actor {
        Role::Owner => true,
        Role::Admin => target == Role::Member,
        Role::Member => false,
    }
}

/// A guarded operation, carrying whatever context its rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ManageAdmins,
    EditModel { is_own_model: bool },
    DeleteModel,
    AccessOrgSettings,
    ManageTeam,
    AccessBilling,
    ChangeRole { current: Role, new: Role },
    RemoveMember { target: Role },
}

impl Action {
    /// Stable label for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ManageAdmins => "manage_admins",
            Self::EditModel { .. } => "edit_model",
            Self::DeleteModel => "delete_model",
            Self::AccessOrgSettings => "access_org_settings",
            Self::ManageTeam => "manage_team",
            Self::AccessBilling => "access_billing",
            Self::ChangeRole { .. } => "change_role",
            Self::RemoveMember { .. } => "remove_member",
        }
    }

    /// Lowest role for which this action is allowed.
    ///
    /// `EditModel` on one's own model is allowed for everyone, so the minimum
    /// there is `Member`.
    pub fn required_role(&self) -> Role {
        Role::ALL
            .iter()
            .rev()
            .copied()
            .find(|role| self.permits(*role))
            .unwrap_or(Role::Owner)
    }

    fn permits(&self, actor: Role) -> bool {
        match *self {
            Self::ManageAdmins => can_manage_admins(actor),
            Self::EditModel { is_own_model } => can_edit_model(actor, is_own_model),
            Self::DeleteModel => can_delete_model(actor),
            Self::AccessOrgSettings => can_access_org_settings(actor),
            Self::ManageTeam => can_manage_team(actor),
            Self::AccessBilling => can_access_billing(actor),
            Self::ChangeRole { current, new } => can_change_role(actor, current, new),
            Self::RemoveMember { target } => can_remove_member(actor, target),
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied {
        action: Action,
        actor: Role,
        required: Role,
    },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn denial_message(&self) -> Option<String> {
        match self {
            Self::Allowed => None,
            Self::Denied {
                action,
                actor,
                required,
            } => Some(format!(
                "Action '{}' requires the {} role (you are {})",
                action.name(),
                required,
                actor
            )),
        }
    }
}

/// Decide whether `actor` may perform `action`.
pub fn authorize(actor: Role, action: &Action) -> AccessDecision {
    if action.permits(actor) {
        return AccessDecision::Allowed;
    }

    let required = action.required_role();
    debug!(
        action = action.name(),
        actor = actor.as_str(),
        required = required.as_str(),
        "authorization denied"
    );
    AccessDecision::Denied {
        action: *action,
        actor,
        required,
    }
}

/// Like [`authorize`], but a denial becomes `PolicyError::Forbidden`.
pub fn require(actor: Role, action: &Action) -> PolicyResult<()> {
    match authorize(actor, action) {
        AccessDecision::Allowed => Ok(()),
        AccessDecision::Denied {
            action,
            actor,
            required,
        } => Err(PolicyError::Forbidden {
            action: action.name(),
            actor,
            required,
        }),
    }
}
