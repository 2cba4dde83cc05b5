use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use momantza_core::{Resolution, TenancyError, TenantContext};

use crate::TenancyAxumError;

/// What the resolver left on a request. Set once by the middleware,
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTenant {
    pub context: Option<TenantContext>,
    /// Label 0 of the host, if the host had two or more labels.
    pub raw_subdomain: Option<String>,
    /// Identifier found in the path, even when its lookup failed.
    pub path_tenant_id: Option<String>,
}

impl From<Resolution> for RequestTenant {
    fn from(res: Resolution) -> Self {
        Self {
            raw_subdomain: res.raw_subdomain().map(str::to_string),
            path_tenant_id: res.path_tenant_id().map(str::to_string),
            context: res.context,
        }
    }
}

/// Requires a resolved tenant; answers 404 `NotFound` otherwise.
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub TenantContext);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = TenancyAxumError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestTenant>()
            .and_then(|t| t.context.clone())
            .map(CurrentTenant)
            .ok_or_else(|| TenancyError::not_found("Organization not found").into())
    }
}

/// Whatever the resolver found, possibly nothing.
#[derive(Debug, Clone, Default)]
pub struct MaybeTenant(pub RequestTenant);

impl<S> FromRequestParts<S> for MaybeTenant
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeTenant(
            parts
                .extensions
                .get::<RequestTenant>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
