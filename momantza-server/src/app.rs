use std::sync::Arc;

use anyhow::Result;
use momantza_core::config::TENANTS_SEED;
use momantza_core::{MemoryTenantStore, TenancyConfig};

/// Environment variables `MOMANTZA__A__B` override key `a.b`.
pub const ENV_PREFIX: &str = "MOMANTZA";

pub fn load_config() -> TenancyConfig {
    let mut config = TenancyConfig::with_defaults();
    config.load_env(ENV_PREFIX);
    config
}

/// Tenant store seeded from `tenants.seed`, or empty when unset.
pub async fn tenant_store(config: &TenancyConfig) -> Result<Arc<MemoryTenantStore>> {
    let store = match config.get(TENANTS_SEED) {
        Some(path) => MemoryTenantStore::load_json_file(path).await?,
        None => {
            tracing::warn!("no tenants.seed configured; starting with an empty tenant store");
            MemoryTenantStore::new()
        }
    };

    let tenants = store.len().await;
    tracing::info!(tenants, "tenant store ready");
    Ok(Arc::new(store))
}
