//! Catalog Domain
//!
//! Read-mostly product catalog: paginated, filterable product listing,
//! product detail by code with variant price inheritance, and category
//! listing and creation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, ProductCodePath extractor
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← CatalogService, CategoryService
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Traits, in-memory and Postgres implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, filters, response bodies
//! └─────────────┘
//! ```
//!
//! Request input is normalised by [`filters`] and [`validation`] before a
//! service is called; [`assembler`] turns products into response bodies.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryCatalogRepository,
//!     service::{CatalogService, CategoryService},
//! };
//!
//! let repository = InMemoryCatalogRepository::new();
//!
//! let router = axum::Router::new()
//!     .nest("/catalog", handlers::catalog_router(CatalogService::new(repository.clone())))
//!     .nest("/categories", handlers::categories_router(CategoryService::new(repository)));
//! ```

pub mod assembler;
pub mod entity;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use assembler::{assemble, assemble_categories};
pub use error::{CatalogError, CatalogResult};
pub use filters::validate_filters;
pub use models::{
    CatalogQuery, CatalogResponse, CategoriesResponse, Category, CategoryView, CreateCategory,
    MessageResponse, Product, ProductView, SearchFilters, Variant, VariantView,
};
pub use postgres::{PgCategoryRepository, PgProductRepository};
pub use repository::{CategoryRepository, InMemoryCatalogRepository, ProductRepository};
pub use service::{CatalogService, CategoryService};
pub use validation::{ProductCodePath, is_valid_product_code};
