//! Error taxonomy shared by every domain crate.
//!
//! Domain layers raise typed failures; [`AppError`] is the single point where a
//! failure becomes a transport response. Bodies are plain-text messages.

pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Schema violation; the message is the first validation issue.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    BadRequest(String),

    /// Internal failure. The detail is logged, never sent to the client.
    #[error("Unclassified error: {0}")]
    Unclassified(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::Validation,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Unclassified(_) => ErrorCode::Unclassified,
        }
    }

    /// Message as seen by the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Unclassified(_) => ErrorCode::Unclassified.default_message().to_string(),
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::AlreadyExists(msg)
            | AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(first_validation_message(&errors, &[]))
    }
}

/// Message of the first validation issue.
///
/// Fields listed in `field_order` come first, in that order; any others follow
/// in name order.
pub fn first_validation_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by_key(|(field, _)| {
        let name: &str = field;
        let rank = field_order
            .iter()
            .position(|ordered| *ordered == name)
            .unwrap_or(field_order.len());
        (rank, name.to_string())
    });

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {}", field),
            })
        })
        .unwrap_or_else(|| ErrorCode::Validation.default_message().to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match &self {
            AppError::Unclassified(detail) => {
                tracing::error!(error_code = code.code(), "Unexpected error: {}", detail);
            }
            AppError::Validation(msg) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", msg);
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
            }
            AppError::AlreadyExists(msg) => {
                tracing::info!(error_code = code.code(), "Already exists: {}", msg);
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error_code = code.code(), "Bad request: {}", msg);
            }
        }

        (code.status(), self.public_message()).into_response()
    }
}
