//! Token service.
//!
//! Issues and verifies HS256-signed tokens carrying the acting user's id, name
//! and role.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtConfig, TokenManager, TokenPayload};
//! use core_config::FromEnv;
//!
//! let tokens = TokenManager::new(&JwtConfig::from_env()?);
//! let token = tokens.create_token(&TokenPayload::new(id, "Ana", "normal"))?;
//! let payload = tokens.get_payload(&token);
//! ```

pub mod config;
pub mod jwt;

pub use config::JwtConfig;
pub use jwt::{JwtClaims, TokenManager, TokenPayload, strip_bearer};
