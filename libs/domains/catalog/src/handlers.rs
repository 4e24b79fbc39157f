use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::assembler::assemble;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogQuery, CatalogResponse, CategoriesResponse, CategoryView, CreateCategory,
    MessageResponse, ProductView, VariantView,
};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::{CatalogService, CategoryService};
use crate::validation::ProductCodePath;

pub const CATALOG_TAG: &str = "catalog";
pub const CATEGORIES_TAG: &str = "categories";

/// OpenAPI documentation for the catalog and category endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_catalog, get_catalog_product, list_categories, create_category),
    components(
        schemas(
            CatalogResponse,
            ProductView,
            VariantView,
            CategoriesResponse,
            CategoryView,
            CreateCategory,
            MessageResponse
        ),
        responses(BadRequestResponse, ConflictResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = CATALOG_TAG, description = "Product catalog browsing"),
        (name = CATEGORIES_TAG, description = "Category listing and creation")
    )
)]
pub struct ApiDoc;

/// Router for `/catalog`
pub fn catalog_router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_catalog))
        .route("/{code}", get(get_catalog_product))
        .with_state(shared_service)
}

/// Router for `/categories`
pub fn categories_router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .with_state(shared_service)
}

/// List products, paginated and optionally filtered
///
/// Malformed parameters fall back to their defaults instead of failing.
#[utoipa::path(
    get,
    path = "/catalog",
    tag = CATALOG_TAG,
    params(CatalogQuery),
    responses(
        (status = 200, description = "Page of products", body = CatalogResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_catalog<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> CatalogResult<Json<CatalogResponse>> {
    let filters = CatalogQuery::from_pairs(pairs).into_filters();
    let products = service.list(filters).await?;
    Ok(Json(assemble(&products, false)))
}

/// Get a product by code, with its variants
#[utoipa::path(
    get,
    path = "/catalog/{code}",
    tag = CATALOG_TAG,
    params(
        ("code" = String, Path, description = "Product code, `PROD` followed by 3 digits", example = "PROD001")
    ),
    responses(
        (status = 200, description = "Product with variants", body = CatalogResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_catalog_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ProductCodePath(code): ProductCodePath,
) -> CatalogResult<Json<CatalogResponse>> {
    let product = service.get_by_code(&code).await?;
    Ok(Json(assemble(std::slice::from_ref(&product), true)))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORIES_TAG,
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CatalogResult<Json<CategoriesResponse>> {
    Ok(Json(service.list().await?))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORIES_TAG,
    request_body = CreateCategory,
    responses(
        (status = 200, description = "Category created", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    payload: Result<Json<CreateCategory>, JsonRejection>,
) -> CatalogResult<Json<MessageResponse>> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected category payload");
        CatalogError::Validation("Invalid JSON".to_string())
    })?;

    service.create(input).await?;

    Ok(Json(MessageResponse {
        message: "Category created successfully".to_string(),
    }))
}
