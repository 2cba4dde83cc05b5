use std::sync::Arc;

use momantza_core::MemoryTenantStore;

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<MemoryTenantStore>,
}
