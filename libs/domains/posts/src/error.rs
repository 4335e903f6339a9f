use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_users::UserError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PostResult<T> = Result<T, PostError>;

impl PostError {
    pub fn post_not_found(id: Uuid) -> Self {
        PostError::NotFound(format!("Post {} not found", id))
    }

    pub fn already_exists() -> Self {
        PostError::AlreadyExists("Post already exists".to_string())
    }
}

impl From<sea_orm::DbErr> for PostError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => PostError::already_exists(),
            _ => PostError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Failures reading the creator. Only store errors reach here; a missing
/// creator is not an error.
impl From<UserError> for PostError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(msg) => PostError::NotFound(msg),
            UserError::AlreadyExists(msg) => PostError::AlreadyExists(msg),
            UserError::BadRequest(msg) | UserError::Internal(msg) => PostError::Internal(msg),
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(msg) => AppError::NotFound(msg),
            PostError::AlreadyExists(msg) => AppError::AlreadyExists(msg),
            PostError::Internal(msg) => AppError::Unclassified(msg),
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
