//! Custom extractors for Axum handlers.

pub mod authorization;
pub mod validated_json;

pub use authorization::AuthorizationToken;
pub use validated_json::{FieldOrder, ValidatedJson};
