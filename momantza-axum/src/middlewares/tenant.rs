use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{params::RequestTarget, RequestTenant, TenancyState};

/// Resolve the tenant before routing.
///
/// Install with `axum::middleware::from_fn_with_state(state, resolve_tenant)`.
/// Attaches a [`RequestTenant`] and continues, or answers `302 Found`
/// when the resolver asks for a redirect.
pub async fn resolve_tenant(
    State(state): State<TenancyState>,
    mut req: Request,
    next: Next,
) -> Response {
    let target = RequestTarget::from_parts(req.headers(), req.uri());
    let resolution = state.resolver.resolve(&target.host, &target.path).await;

    if let Some(location) = &resolution.redirect_to {
        return found(location);
    }

    req.extensions_mut().insert(RequestTenant::from(resolution));
    next.run(req).await
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
