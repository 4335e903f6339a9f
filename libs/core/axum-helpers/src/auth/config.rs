//! Token service configuration, loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse_or_default, env_required};

/// Default token lifetime: one day.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 86_400;

/// Longest accepted token lifetime: ten years.
pub const MAX_EXPIRES_IN_SECS: i64 = 10 * 365 * 86_400;

/// JWT signing configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - Must be at least 32 characters
/// - `JWT_EXPIRES_IN_SECS` (default: 86400, at most ten years)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
    /// Lifetime of issued tokens, in seconds
    pub expires_in_secs: i64,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret and the default lifetime.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            expires_in_secs: DEFAULT_EXPIRES_IN_SECS,
        }
    }

    pub fn with_expires_in_secs(mut self, secs: i64) -> Self {
        self.expires_in_secs = secs;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let expires_in_secs: i64 =
            env_parse_or_default("JWT_EXPIRES_IN_SECS", &DEFAULT_EXPIRES_IN_SECS.to_string())?;
        if !(1..=MAX_EXPIRES_IN_SECS).contains(&expires_in_secs) {
            return Err(ConfigError::ParseError {
                key: "JWT_EXPIRES_IN_SECS".to_string(),
                details: format!("must be between 1 and {}", MAX_EXPIRES_IN_SECS),
            });
        }

        Ok(Self {
            secret,
            expires_in_secs,
        })
    }
}
