//! Handler tests for the catalog domain
//!
//! These drive the catalog and category routers end to end over an
//! in-memory store:
//! - Query parameter normalisation (never a 400)
//! - Product code rejection before the store is touched
//! - Response body shapes and status codes

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn dec(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap()
}

fn variant(id: i32, product_id: i32, sku: &str, price: Option<&str>) -> Variant {
    Variant {
        id,
        product_id,
        name: sku.to_string(),
        sku: sku.to_string(),
        price: price.map(dec),
    }
}

/// Two categories, three products; PROD001 has one inheriting and one priced variant
async fn seeded_repository() -> InMemoryCatalogRepository {
    let repo = InMemoryCatalogRepository::new();

    let clothing = Category {
        id: 1,
        code: "clothing".into(),
        name: "Clothing".into(),
    };
    let shoes = Category {
        id: 2,
        code: "shoes".into(),
        name: "Shoes".into(),
    };
    repo.seed_category(clothing.clone()).await;
    repo.seed_category(shoes.clone()).await;

    repo.seed_product(Product {
        id: 1,
        code: "PROD001".into(),
        price: dec("100.50"),
        category: clothing.clone(),
        variants: vec![
            variant(1, 1, "PROD001-M", None),
            variant(2, 1, "PROD001-L", Some("120")),
        ],
    })
    .await;
    repo.seed_product(Product {
        id: 2,
        code: "PROD002".into(),
        price: dec("200.75"),
        category: shoes,
        variants: vec![],
    })
    .await;
    repo.seed_product(Product {
        id: 3,
        code: "PROD003".into(),
        price: dec("15"),
        category: clothing,
        variants: vec![variant(3, 3, "PROD003-S", None)],
    })
    .await;

    repo
}

fn app(repo: InMemoryCatalogRepository) -> Router {
    Router::new()
        .nest(
            "/catalog",
            handlers::catalog_router(CatalogService::new(repo.clone())),
        )
        .nest(
            "/categories",
            handlers::categories_router(CategoryService::new(repo)),
        )
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn post_category(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/categories")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

fn product_codes(body: &Value) -> Vec<&str> {
    body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_catalog_defaults() {
    let (status, body) = get(app(seeded_repository().await), "/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_codes(&body), vec!["PROD001", "PROD002", "PROD003"]);
    assert_eq!(body["products_available"], 3);
    assert!(body.get("variants").is_none());
    assert_eq!(
        body["products"][0],
        json!({"code": "PROD001", "price": 100.5, "category": "Clothing"})
    );
}

#[tokio::test]
async fn test_list_catalog_filters_and_paginates() {
    let repo = seeded_repository().await;

    let (_, body) = get(app(repo.clone()), "/catalog?category=clothing&priceLessThan=50").await;
    assert_eq!(product_codes(&body), vec!["PROD003"]);
    assert_eq!(body["products_available"], 1);

    let (_, body) = get(app(repo), "/catalog?offset=1&limit=1").await;
    assert_eq!(product_codes(&body), vec!["PROD002"]);
    assert_eq!(body["products_available"], 0);
}

#[tokio::test]
async fn test_list_catalog_malformed_params_fall_back() {
    let (status, body) = get(
        app(seeded_repository().await),
        "/catalog?offset=-5&limit=abc&priceLessThan=-1&unknown=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_codes(&body), vec!["PROD001", "PROD002", "PROD003"]);
}

#[tokio::test]
async fn test_list_catalog_first_parameter_wins() {
    let (_, body) = get(
        app(seeded_repository().await),
        "/catalog?limit=1&limit=50&category=shoes&category=clothing",
    )
    .await;

    assert_eq!(product_codes(&body), vec!["PROD002"]);
}

#[tokio::test]
async fn test_list_catalog_unknown_category_is_empty_success() {
    let (status, body) = get(app(seeded_repository().await), "/catalog?category=bags").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"products": [], "products_available": 0}));
}

#[tokio::test]
async fn test_get_product_with_inherited_variant_price() {
    let (status, body) = get(app(seeded_repository().await), "/catalog/PROD001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_codes(&body), vec!["PROD001"]);
    assert_eq!(body["products_available"], 2);
    assert_eq!(
        body["variants"],
        json!([
            {"id": 1, "name": "PROD001-M", "sku": "PROD001-M", "price": "100.5", "productId": 1},
            {"id": 2, "name": "PROD001-L", "sku": "PROD001-L", "price": "120", "productId": 1}
        ])
    );
}

#[tokio::test]
async fn test_get_product_without_variants_has_empty_collection() {
    let (status, body) = get(app(seeded_repository().await), "/catalog/PROD002").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["variants"], json!([]));
}

#[tokio::test]
async fn test_get_unknown_product_returns_zero_product() {
    let (status, body) = get(app(seeded_repository().await), "/catalog/PROD999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "products": [{"code": "", "price": 0.0, "category": ""}],
            "products_available": 0,
            "variants": []
        })
    );
}

#[tokio::test]
async fn test_get_product_rejects_malformed_code() {
    for code in ["PROD1", "prod001", "PROD12A", "PROD0001"] {
        let (status, body) = get(app(seeded_repository().await), &format!("/catalog/{}", code)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", code);
        assert_eq!(
            body["message"],
            "Invalid product code format. Expected format: PROD followed by 3 digits (e.g., PROD001)"
        );
        assert_eq!(body["error"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_list_categories() {
    let (status, body) = get(app(seeded_repository().await), "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"categories": [
            {"code": "clothing", "name": "Clothing"},
            {"code": "shoes", "name": "Shoes"}
        ]})
    );
}

#[tokio::test]
async fn test_create_category_then_list() {
    let repo = seeded_repository().await;

    let (status, body) = post_category(app(repo.clone()), r#"{"code":"bags","name":"Bags"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Category created successfully"}));

    let (_, body) = get(app(repo), "/categories").await;
    assert_eq!(body["categories"][2], json!({"code": "bags", "name": "Bags"}));
}

#[tokio::test]
async fn test_create_category_duplicate_is_conflict() {
    let repo = seeded_repository().await;

    let (status, body) =
        post_category(app(repo.clone()), r#"{"code":"shoes","name":"Other"}"#).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "category code already exists");

    let stored = CategoryRepository::get_by_code(&repo, "shoes")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Shoes");
}

#[tokio::test]
async fn test_create_category_missing_fields() {
    for payload in [
        r#"{"code":"bags"}"#,
        r#"{"name":"Bags"}"#,
        r#"{"code":"","name":"Bags"}"#,
        r#"{"code":null,"name":"Bags"}"#,
        r#"{"code":"bags","name":null}"#,
        r#"{}"#,
    ] {
        let (status, body) = post_category(app(seeded_repository().await), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["message"], "Code and name are required");
    }
}

#[tokio::test]
async fn test_create_category_invalid_json() {
    let (status, body) = post_category(app(seeded_repository().await), "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON");
}
