use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Authorization context carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl TokenPayload {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub id: String,
    pub name: String,
    pub role: String,
    pub iat: i64, // Issued at
    pub exp: i64, // Expiration time
}

impl From<JwtClaims> for TokenPayload {
    fn from(claims: JwtClaims) -> Self {
        Self {
            id: claims.id,
            name: claims.name,
            role: claims.role,
        }
    }
}

/// Signs and verifies tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl TokenManager {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(
            expires_in_secs = config.expires_in_secs,
            "Token manager initialized"
        );
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expires_in: Duration::try_seconds(config.expires_in_secs).unwrap_or(Duration::MAX),
        }
    }

    /// Sign `payload` into a token valid for the configured lifetime.
    pub fn create_token(&self, payload: &TokenPayload) -> eyre::Result<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.expires_in)
            .ok_or_else(|| eyre::eyre!("token lifetime overflows the expiry timestamp"))?;
        let claims = JwtClaims {
            id: payload.id.clone(),
            name: payload.name.clone(),
            role: payload.role.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Decode and verify a token.
    ///
    /// Returns `None` for a bad signature, a malformed token or an expired one.
    /// A leading `Bearer ` is ignored.
    pub fn get_payload(&self, token: &str) -> Option<TokenPayload> {
        let token = strip_bearer(token);
        if token.is_empty() {
            return None;
        }

        match decode::<JwtClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256)) {
            Ok(data) => Some(data.claims.into()),
            Err(e) => {
                tracing::debug!("Token rejected: {}", e);
                None
            }
        }
    }
}

/// Strip an optional `Bearer ` scheme from an `Authorization` value.
pub fn strip_bearer(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim()
}
