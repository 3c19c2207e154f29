//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use countrydesk_core::config::AuthConfig;
use countrydesk_core::error::AppError;

use super::claims::{Claims, Subject};

/// Creates signed HS256 tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Lifetime applied when the caller does not pass one.
    default_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The compact JWT string.
    pub token: String,
    /// Absolute expiration time.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            default_ttl: Duration::minutes(config.token_ttl_minutes),
        }
    }

    /// Signs a token for `subject` stamped with `token_version`, valid from
    /// now for `ttl` (or the configured default).
    pub fn issue(
        &self,
        subject: &Subject,
        token_version: i32,
        ttl: Option<Duration>,
    ) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, token_version, ttl, Utc::now())
    }

    /// Like [`issue`](Self::issue) with an explicit issuance time.
    ///
    /// Identical inputs produce an identical token.
    pub fn issue_at(
        &self,
        subject: &Subject,
        token_version: i32,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = now + ttl.unwrap_or(self.default_ttl);

        let claims = Claims {
            sub: subject.user_id,
            login: subject.login.clone(),
            token_version,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
