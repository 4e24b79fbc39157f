use axum::{Router, routing::get};

use crate::state::AppState;

pub mod catalog;
pub mod categories;
pub mod health;

/// Catalog and category routes, each with its service already applied
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/catalog", catalog::router(state))
        .nest("/categories", categories::router(state))
}

/// `/ready` with a live database check; merged after `create_router`
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
