//! Role lattice and authorization bindings.
//!
//! Every function takes role strings (`"owner" | "admin" | "member"`) and
//! rejects anything else with `UNKNOWN_ROLE`.

use napi_derive::napi;

use shelf_core::permissions;
use shelf_core::roles;

use crate::conversions::types::parse_role;

#[napi(js_name = "roleRank")]
pub fn role_rank(role: String) -> napi::Result<u32> {
    Ok(u32::from(parse_role(&role)?.rank()))
}

#[napi(js_name = "atLeast")]
pub fn at_least(actual: String, required: String) -> napi::Result<bool> {
    Ok(roles::at_least(parse_role(&actual)?, parse_role(&required)?))
}

#[napi(js_name = "canManageAdmins")]
pub fn can_manage_admins(actor_role: String) -> napi::Result<bool> {
    Ok(permissions::can_manage_admins(parse_role(&actor_role)?))
}

#[napi(js_name = "canEditModel")]
pub fn can_edit_model(actor_role: String, is_own_model: bool) -> napi::Result<bool> {
    Ok(permissions::can_edit_model(parse_role(&actor_role)?, is_own_model))
}

#[napi(js_name = "canDeleteModel")]
pub fn can_delete_model(actor_role: String) -> napi::Result<bool> {
    Ok(permissions::can_delete_model(parse_role(&actor_role)?))
}

#[napi(js_name = "canAccessOrgSettings")]
pub fn can_access_org_settings(actor_role: String) -> napi::Result<bool> {
    Ok(permissions::can_access_org_settings(parse_role(&actor_role)?))
}

#[napi(js_name = "canManageTeam")]
pub fn can_manage_team(actor_role: String) -> napi::Result<bool> {
    Ok(permissions::can_manage_team(parse_role(&actor_role)?))
}

#[napi(js_name = "canAccessBilling")]
pub fn can_access_billing(actor_role: String) -> napi::Result<bool> {
    Ok(permissions::can_access_billing(parse_role(&actor_role)?))
}

#[napi(js_name = "canChangeRole")]
pub fn can_change_role(
    actor_role: String,
    target_current_role: String,
    target_new_role: String,
) -> napi::Result<bool> {
    Ok(permissions::can_change_role(
        parse_role(&actor_role)?,
        parse_role(&target_current_role)?,
        parse_role(&target_new_role)?,
    ))
}

#[napi(js_name = "canRemoveMember")]
pub fn can_remove_member(actor_role: String, target_role: String) -> napi::Result<bool> {
    Ok(permissions::can_remove_member(
        parse_role(&actor_role)?,
        parse_role(&target_role)?,
    ))
}
