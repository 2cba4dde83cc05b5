mod app;
mod services;

use std::sync::Arc;

use anyhow::Result;
use momantza_axum::{axum, AxumApp};
use momantza_core::{MemoryTenantStore, TenancyConfig};

pub use app::{load_config, tenant_store, ENV_PREFIX};
pub use services::ServerState;

pub async fn build(config: &TenancyConfig) -> Result<AxumApp> {
    let store = tenant_store(config).await?;
    Ok(build_with_store(config, store))
}

pub fn build_with_store(config: &TenancyConfig, store: Arc<MemoryTenantStore>) -> AxumApp {
    let state = ServerState {
        store: Arc::clone(&store),
    };

    axum(store, config)
        .merge(services::configure(state))
        .service("/health", || async { "ok" })
}
