use std::sync::Arc;

use momantza_core::TenantResolver;

/// State handed to the resolver middleware.
#[derive(Clone, Debug)]
pub struct TenancyState {
    pub resolver: Arc<TenantResolver>,
}

impl TenancyState {
    pub fn new(resolver: TenantResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
