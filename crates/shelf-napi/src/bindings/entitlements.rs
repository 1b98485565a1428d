//! Entitlement bindings.

use napi_derive::napi;

use shelf_core::entitlements;

use crate::conversions::types::{parse_quantity, JsOverage};

#[napi(js_name = "computeOverage")]
pub fn compute_overage(
    models_used: i64,
    models_limit: i64,
    storage_used: i64,
    storage_limit: i64,
) -> napi::Result<JsOverage> {
    let overage = entitlements::compute_overage(
        parse_quantity("modelsUsed", models_used)?,
        parse_quantity("modelsLimit", models_limit)?,
        parse_quantity("storageUsed", storage_used)?,
        parse_quantity("storageLimit", storage_limit)?,
    );
    Ok(JsOverage::from(&overage))
}

#[napi(js_name = "formatBytes")]
pub fn format_bytes(bytes: i64) -> napi::Result<String> {
    Ok(entitlements::format_bytes(parse_quantity("bytes", bytes)?))
}
