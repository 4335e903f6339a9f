use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

use crate::auth::strip_bearer;

/// Raw token from the `Authorization` header, `Bearer ` stripped.
///
/// Never rejects: a missing or non-UTF-8 header yields an empty string, which
/// the token service treats as invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationToken(pub String);

impl<S> FromRequestParts<S> for AuthorizationToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(strip_bearer)
            .unwrap_or_default();

        Ok(AuthorizationToken(token.to_string()))
    }
}
