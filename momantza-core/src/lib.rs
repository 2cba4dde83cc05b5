//! momantza-core: framework-agnostic tenancy for Momantza.
//!
//! Resolves which organization an inbound request belongs to from its
//! host and path. The HTTP side lives in `momantza-axum`.

pub mod config;
pub mod errors;
pub mod host;
pub mod lookup;
pub mod path;
pub mod resolver;
pub mod tenant;

pub use config::{TenancyConfig, TenancyConfigSnapshot};
pub use errors::{ErrorKind, TenancyError};
pub use host::HostParts;
pub use lookup::{MemoryTenantStore, TenantLookup};
pub use path::PathHint;
pub use resolver::{Resolution, ResolutionState, ResolvedBy, TenantResolver};
pub use tenant::{TenantContext, TenantId, TenantRecord};
