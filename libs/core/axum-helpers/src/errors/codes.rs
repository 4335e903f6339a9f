//! Error kinds and their transport mapping.
//!
//! Each kind carries:
//! - a string identifier used in structured logs (e.g. "ALREADY_EXISTS")
//! - an integer code for monitoring (e.g. 1003)
//! - the HTTP status it maps to
//! - a default human-readable message
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//! use axum::http::StatusCode;
//!
//! let code = ErrorCode::AlreadyExists;
//! assert_eq!(code.as_str(), "ALREADY_EXISTS");
//! assert_eq!(code.status(), StatusCode::CONFLICT);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed input: unparsable body or a schema violation
    Validation,

    /// Requested entity does not exist
    NotFound,

    /// Uniqueness conflict (identifier or email already taken)
    AlreadyExists,

    /// Authorization or credential failure
    BadRequest,

    /// Anything else; the detail is never shown to clients
    Unclassified,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }

    /// Integer code for logs and metrics.
    ///
    /// 1000-1999 are client errors, 5000-5999 server errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::Validation => 1001,
            Self::NotFound => 1002,
            Self::AlreadyExists => 1003,
            Self::BadRequest => 1004,
            Self::Unclassified => 5000,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Validation => "Invalid request",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "User already registered",
            Self::BadRequest => "Bad request",
            Self::Unclassified => "Unexpected error",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
