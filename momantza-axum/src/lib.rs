//! momantza-axum: Axum adapter for Momantza tenancy.
//!
//! Runs the tenant resolver in front of every route and hands the result
//! to handlers as a typed request extension.

pub mod app;
pub mod extract;
pub mod middlewares;
pub mod params;
pub mod state;
mod error;
pub use error::TenancyAxumError;
pub use extract::{CurrentTenant, MaybeTenant, RequestTenant};
pub use state::TenancyState;

pub use app::{axum, AxumApp};
