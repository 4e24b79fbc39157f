//! Product code format check and the path extractor built on it.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::CatalogError;

/// `PROD` followed by exactly three ASCII digits
static PRODUCT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PROD[0-9]{3}$").expect("valid product code pattern"));

/// Returns true when `code` is a well-formed product code such as `PROD001`.
pub fn is_valid_product_code(code: &str) -> bool {
    PRODUCT_CODE.is_match(code)
}

/// Extractor for a `{code}` path segment that only accepts valid product codes.
///
/// Rejects with 400 before the handler (and therefore the store) is reached.
///
/// ```ignore
/// async fn get_product(ProductCodePath(code): ProductCodePath) -> String {
///     code
/// }
/// ```
pub struct ProductCodePath(pub String);

impl<S> FromRequestParts<S> for ProductCodePath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(code) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        if is_valid_product_code(&code) {
            Ok(ProductCodePath(code))
        } else {
            tracing::debug!(product_code = %code, "Rejected malformed product code");
            Err(CatalogError::InvalidProductCode(code).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_codes() {
        for code in ["PROD001", "PROD123", "PROD999", "PROD000"] {
            assert!(is_valid_product_code(code), "{}", code);
        }
    }

    #[test]
    fn test_rejects_malformed_codes() {
        for code in [
            "", "PROD1", "prod001", "PROD12A", "PROD0001", " PROD001", "PROD001 ", "XPROD001",
            "PROD١٢٣",
        ] {
            assert!(!is_valid_product_code(code), "{:?}", code);
        }
    }
}
