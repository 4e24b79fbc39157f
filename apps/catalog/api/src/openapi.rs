use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog browsing and category management"
    )
)]
struct BaseDoc;

/// Full document: service metadata plus the catalog domain's paths
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_catalog::handlers::ApiDoc::openapi());
        doc
    }
}
