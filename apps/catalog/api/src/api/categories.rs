use axum::Router;
use domain_catalog::{CategoryService, PgCategoryRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgCategoryRepository::new(state.db.clone());
    handlers::categories_router(CategoryService::new(repository))
}
