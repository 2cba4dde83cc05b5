use axum::routing::get;
use axum::Router;

pub mod organizations;
pub mod types;
pub use types::ServerState;

pub fn configure(state: ServerState) -> Router<()> {
    Router::new()
        .route("/", get(organizations::landing))
        .route("/api/organizations/current", get(organizations::current))
        .route("/api/tenant/resolution", get(organizations::resolution))
        .route("/org/{id}", get(organizations::org_home))
        .route("/org/{id}/{*rest}", get(organizations::org_home))
        .with_state(state)
}
