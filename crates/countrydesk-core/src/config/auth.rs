//! Authentication configuration.

use std::fmt;

use serde::Deserialize;

use crate::error::AppError;
use crate::result::AppResult;

/// Secrets shorter than this are accepted but logged as weak.
const RECOMMENDED_SECRET_BYTES: usize = 32;

/// Token signing and lifetime configuration.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Has no default.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
}

impl AuthConfig {
    /// Creates an auth configuration with the default token lifetime.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_ttl_minutes: default_token_ttl(),
        }
    }

    /// Checks that a signing secret is present and the lifetime is positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set (COUNTRYDESK_AUTH__JWT_SECRET or RANDOM_SECRET)",
            ));
        }

        if self.token_ttl_minutes <= 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_minutes must be greater than zero",
            ));
        }

        if self.jwt_secret.len() < RECOMMENDED_SECRET_BYTES {
            tracing::warn!(
                length = self.jwt_secret.len(),
                recommended = RECOMMENDED_SECRET_BYTES,
                "auth.jwt_secret is shorter than recommended"
            );
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_secret(String::new())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

fn default_token_ttl() -> i64 {
    60
}
