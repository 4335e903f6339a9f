//! # Axum Helpers
//!
//! Shared HTTP plumbing for the blog services.
//!
//! ## Modules
//!
//! - **[`errors`]**: the [`AppError`] taxonomy and its mapping to responses
//! - **[`auth`]**: JWT token service ([`TokenManager`])
//! - **[`extractors`]**: validated JSON bodies and the `Authorization` token
//! - **[`server`]**: router composition, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{JwtConfig, TokenManager, TokenPayload};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, first_validation_message};

pub use extractors::{AuthorizationToken, FieldOrder, ValidatedJson};
