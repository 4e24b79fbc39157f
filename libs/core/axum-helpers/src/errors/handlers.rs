use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// JSON 404 for unknown routes
pub async fn not_found() -> Response {
    plain(StatusCode::NOT_FOUND, ErrorCode::NotFound)
}

/// JSON 405 for known routes hit with the wrong method
pub async fn method_not_allowed() -> Response {
    plain(StatusCode::METHOD_NOT_ALLOWED, ErrorCode::MethodNotAllowed)
}

fn plain(status: StatusCode, code: ErrorCode) -> Response {
    error_response(status, code.default_message().to_string(), code)
}
