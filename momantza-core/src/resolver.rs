//! Per-request tenant resolution.
//!
//! Order, stopping at the first hit:
//! 1. subdomain of the host, looked up by domain prefix
//! 2. `/org/{id}` or bare `/{uuid}` in the path, looked up by id
//!
//! Lookup failures are logged and count as "no match". A request for
//! exactly `/` that resolved while carrying a subdomain is redirected to
//! the front-end origin instead of being handled.

use std::sync::Arc;

use crate::config::TenancyConfigSnapshot;
use crate::host::HostParts;
use crate::lookup::TenantLookup;
use crate::path::PathHint;
use crate::tenant::TenantContext;

/// Which step produced the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    Subdomain,
    Path,
}

/// Terminal state of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// Tenant found; the request continues with it.
    Resolved(ResolvedBy),
    /// Nothing found; the request continues without a tenant.
    Unresolved,
    /// Tenant found on the site root; the pipeline stops here.
    Redirected,
}

/// Everything the resolver learned about one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub host: HostParts,
    /// Only set when the path step ran, i.e. the subdomain step found nothing.
    pub path_hint: Option<PathHint>,
    pub context: Option<TenantContext>,
    pub resolved_by: Option<ResolvedBy>,
    pub redirect_to: Option<String>,
}

impl Resolution {
    fn new(host: HostParts) -> Self {
        Self {
            host,
            path_hint: None,
            context: None,
            resolved_by: None,
            redirect_to: None,
        }
    }

    pub fn state(&self) -> ResolutionState {
        match (&self.redirect_to, self.resolved_by) {
            (Some(_), _) => ResolutionState::Redirected,
            (None, Some(by)) => ResolutionState::Resolved(by),
            (None, None) => ResolutionState::Unresolved,
        }
    }

    pub fn raw_subdomain(&self) -> Option<&str> {
        self.host.subdomain.as_deref()
    }

    pub fn path_tenant_id(&self) -> Option<&str> {
        self.path_hint.as_ref().map(PathHint::raw)
    }
}

/// Resolves the tenant of an inbound request from its host and path.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct TenantResolver {
    lookup: Arc<dyn TenantLookup>,
    frontend_origin: String,
}

impl TenantResolver {
    pub fn new(lookup: Arc<dyn TenantLookup>, frontend_origin: impl Into<String>) -> Self {
        let origin: String = frontend_origin.into();
        Self {
            lookup,
            frontend_origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(lookup: Arc<dyn TenantLookup>, config: &TenancyConfigSnapshot) -> Self {
        Self::new(lookup, config.frontend_origin())
    }

    pub fn frontend_origin(&self) -> &str {
        &self.frontend_origin
    }

    pub async fn resolve(&self, host: &str, path: &str) -> Resolution {
        let mut res = Resolution::new(HostParts::parse(host));

        if let Some(subdomain) = res.host.lookup_subdomain() {
            if let Some(ctx) = self.by_subdomain(subdomain).await {
                res.context = Some(ctx);
                res.resolved_by = Some(ResolvedBy::Subdomain);
            }
        }

        if res.context.is_none() {
            res.path_hint = PathHint::parse(path);
            if let Some(hint) = &res.path_hint {
                if let Some(ctx) = self.by_path(hint).await {
                    res.context = Some(ctx);
                    res.resolved_by = Some(ResolvedBy::Path);
                }
            }
        }

        if let Some(ctx) = &res.context {
            if path == "/" && res.host.lookup_subdomain().is_some() {
                let target = self.redirect_url(ctx);
                tracing::info!(tenant_id = %ctx.tenant_id, %target, "redirecting site root to front-end");
                res.redirect_to = Some(target);
            }
        }

        res
    }

    /// `<frontend-origin>/<tenant-id>`, no query string.
    pub fn redirect_url(&self, ctx: &TenantContext) -> String {
        format!("{}/{}", self.frontend_origin, ctx.tenant_id)
    }

    async fn by_subdomain(&self, subdomain: &str) -> Option<TenantContext> {
        match self.lookup.find_by_domain_prefix(subdomain).await {
            Ok(Some(record)) => {
                tracing::debug!(subdomain, tenant_id = %record.id, "tenant resolved from subdomain");
                Some(TenantContext::from_record(&record))
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(subdomain, error = %format!("{err:#}"), "tenant lookup by domain prefix failed");
                None
            }
        }
    }

    async fn by_path(&self, hint: &PathHint) -> Option<TenantContext> {
        let Some(id) = hint.tenant_id() else {
            tracing::debug!(raw = hint.raw(), "path tenant identifier is not a uuid");
            return None;
        };

        match self.lookup.find_by_id(id.0).await {
            Ok(Some(record)) => {
                tracing::debug!(tenant_id = %record.id, "tenant resolved from path");
                Some(TenantContext::from_record(&record))
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(tenant_id = %id, error = %format!("{err:#}"), "tenant lookup by id failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for TenantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantResolver")
            .field("frontend_origin", &self.frontend_origin)
            .finish_non_exhaustive()
    }
}
