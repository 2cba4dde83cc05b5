use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::get;
use axum::{middleware, Router};
use momantza_core::{TenancyConfig, TenancyError, TenantLookup, TenantResolver};
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::middlewares::resolve_tenant;
use crate::{TenancyAxumError, TenancyState};

/// Router builder with tenant resolution in front of every route.
///
/// Routes are collected unlayered; [`AxumApp::into_router`] wraps them in
/// request-id, tracing and tenant resolution.
#[derive(Clone)]
pub struct AxumApp {
    pub state: TenancyState,
    pub router: Router<()>,
}

impl AxumApp {
    pub fn new(resolver: TenantResolver) -> Self {
        Self {
            state: TenancyState::new(resolver),
            router: Router::new(),
        }
    }

    pub fn merge(mut self, router: Router<()>) -> Self {
        self.router = self.router.merge(router);
        self
    }

    pub fn use_get<H, T>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.router = self.router.route(path, get(handler));
        self
    }

    pub fn service<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.use_get(path, handler)
    }

    pub fn into_router(self) -> Router<()> {
        let resolver = middleware::from_fn_with_state(self.state, resolve_tenant);

        // Last layer added runs first.
        self.router
            .fallback(not_found)
            .layer(resolver)
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    pub async fn listen<A>(self, addr: A) -> anyhow::Result<()>
    where
        A: ToSocketAddrs,
    {
        let listener = TcpListener::bind(addr).await?;
        let local = listener.local_addr()?;
        tracing::info!(addr = %local, "listening");
        axum::serve(listener, self.into_router()).await?;
        Ok(())
    }
}

async fn not_found() -> TenancyAxumError {
    TenancyError::not_found("Page not found").into()
}

/// Build an [`AxumApp`] from a lookup and config.
pub fn axum(lookup: Arc<dyn TenantLookup>, config: &TenancyConfig) -> AxumApp {
    let resolver = TenantResolver::from_config(lookup, &config.snapshot());
    AxumApp::new(resolver)
}
