use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Message returned when a path code does not look like `PROD` + 3 digits
pub const INVALID_PRODUCT_CODE: &str =
    "Invalid product code format. Expected format: PROD followed by 3 digits (e.g., PROD001)";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid product code: {0}")]
    InvalidProductCode(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("category code already exists: {0}")]
    DuplicateCategoryCode(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        CatalogError::Database(err.to_string())
    }
}

/// Maps a failed category insert, keeping unique violations apart from other store failures
pub(crate) fn map_insert_error(err: DbErr, code: &str) -> CatalogError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CatalogError::DuplicateCategoryCode(code.to_string())
        }
        _ => err.into(),
    }
}

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidProductCode(_) => {
                AppError::BadRequest(INVALID_PRODUCT_CODE.to_string())
            }
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::DuplicateCategoryCode(_) => {
                AppError::Conflict("category code already exists".to_string())
            }
            CatalogError::Database(msg) => {
                tracing::error!(error = %msg, "Catalog store failure");
                AppError::InternalServerError("Internal server error".to_string())
            }
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
