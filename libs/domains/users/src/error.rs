use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Conflict on a unique user attribute (identifier or email).
    pub fn already_registered() -> Self {
        UserError::AlreadyExists("User already registered".to_string())
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => UserError::already_registered(),
            _ => UserError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(msg) => AppError::NotFound(msg),
            UserError::AlreadyExists(msg) => AppError::AlreadyExists(msg),
            UserError::BadRequest(msg) => AppError::BadRequest(msg),
            UserError::Internal(msg) => AppError::Unclassified(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
