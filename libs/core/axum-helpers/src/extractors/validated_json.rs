//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{AppError, first_validation_message};
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Field declaration order of a request body.
///
/// When several fields fail validation, the issue reported is the one on the
/// earliest field in this list.
pub trait FieldOrder {
    const FIELD_ORDER: &'static [&'static str];
}

/// JSON extractor with automatic validation.
///
/// Both a body that fails to parse and one that fails `Validate` are rejected
/// with [`AppError::Validation`], whose body is the first issue's message.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Signup {
///     #[validate(length(min = 3, message = "name must have at least 3 characters"))]
///     name: String,
/// }
///
/// impl FieldOrder for Signup {
///     const FIELD_ORDER: &'static [&'static str] = &["name"];
/// }
///
/// async fn signup(ValidatedJson(input): ValidatedJson<Signup>) -> String {
///     input.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate().map_err(|errors| {
            AppError::Validation(first_validation_message(&errors, T::FIELD_ORDER))
        })?;
        Ok(ValidatedJson(data))
    }
}
