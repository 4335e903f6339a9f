//! Shared application state.

use axum_helpers::TokenManager;
use database::postgres::DatabaseConnection;

/// Built once at startup and handed to the route builders.
///
/// `db` is `None` when running on the in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub tokens: TokenManager,
    pub db: Option<DatabaseConnection>,
}
