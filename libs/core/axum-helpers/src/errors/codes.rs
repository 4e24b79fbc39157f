//! Error identifiers shared by every JSON error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
//! assert_eq!(ErrorCode::Conflict.code(), 1008);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    /// Duplicate of an existing resource
    Conflict,
    BadRequest,
    MethodNotAllowed,
    InternalError,
    ServiceUnavailable,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 6] = [
        Self::NotFound,
        Self::Conflict,
        Self::BadRequest,
        Self::MethodNotAllowed,
        Self::InternalError,
        Self::ServiceUnavailable,
    ];

    /// (identifier, numeric code, default message)
    const fn descriptor(&self) -> (&'static str, i32, &'static str) {
        match self {
            Self::NotFound => ("NOT_FOUND", 1004, "The requested resource was not found"),
            Self::InternalError => ("INTERNAL_ERROR", 1005, "An internal server error occurred"),
            Self::Conflict => ("CONFLICT", 1008, "Resource already exists"),
            Self::ServiceUnavailable => (
                "SERVICE_UNAVAILABLE",
                1011,
                "Service is temporarily unavailable",
            ),
            Self::BadRequest => ("BAD_REQUEST", 1012, "Bad request"),
            Self::MethodNotAllowed => (
                "METHOD_NOT_ALLOWED",
                1013,
                "The HTTP method is not allowed for this resource",
            ),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        self.descriptor().0
    }

    /// Numeric code for structured logs
    pub const fn code(&self) -> i32 {
        self.descriptor().1
    }

    pub const fn default_message(&self) -> &'static str {
        self.descriptor().2
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
