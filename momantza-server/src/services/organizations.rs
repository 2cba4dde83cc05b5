use axum::extract::State;
use axum::Json;
use momantza_axum::{CurrentTenant, MaybeTenant, TenancyAxumError};
use momantza_core::{TenancyError, TenantLookup, TenantRecord};
use serde_json::{json, Value};

use super::ServerState;

/// Reached only when no tenant resolved from the host; tenant roots redirect.
pub async fn landing() -> &'static str {
    "Momantza"
}

pub async fn current(
    State(state): State<ServerState>,
    CurrentTenant(ctx): CurrentTenant,
) -> Result<Json<TenantRecord>, TenancyAxumError> {
    let record = state
        .store
        .find_by_id(*ctx.tenant_id.as_uuid())
        .await
        .map_err(|e| TenancyError::unavailable("Tenant lookup failed").with_source(e))?
        .ok_or_else(|| TenancyError::not_found("Organization not found"))?;

    Ok(Json(record))
}

pub async fn resolution(MaybeTenant(t): MaybeTenant) -> Json<Value> {
    Json(json!({
        "raw_subdomain": t.raw_subdomain,
        "path_tenant_id": t.path_tenant_id,
        "tenant_id": t.context.as_ref().map(|c| c.tenant_id.to_string()),
        "domain_hint": t.context.as_ref().map(|c| c.domain_hint.clone()),
    }))
}

pub async fn org_home(CurrentTenant(ctx): CurrentTenant) -> Json<Value> {
    Json(json!({
        "tenant_id": ctx.tenant_id.to_string(),
        "domain_hint": ctx.domain_hint,
    }))
}
