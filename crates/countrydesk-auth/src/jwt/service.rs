//! Token service pairing the encoder and decoder around one secret.

use chrono::{DateTime, Duration, Utc};

use countrydesk_core::config::AuthConfig;
use countrydesk_core::error::AppError;

use super::claims::{Claims, Subject};
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};
use super::error::TokenError;

/// Issues and verifies tokens signed with the process-wide secret.
///
/// Pure and in-memory: no I/O, no locks.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates a token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Issues a token expiring `ttl` from now (default: configured lifetime).
    pub fn issue(
        &self,
        subject: &Subject,
        token_version: i32,
        ttl: Option<Duration>,
    ) -> Result<IssuedToken, AppError> {
        self.encoder.issue(subject, token_version, ttl)
    }

    /// Issues a token as of `now`.
    pub fn issue_at(
        &self,
        subject: &Subject,
        token_version: i32,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        self.encoder.issue_at(subject, token_version, ttl, now)
    }

    /// Checks signature and expiry. The token version is not compared here.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.decoder.verify(token)
    }

    /// Checks signature and expiry as of `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.decoder.verify_at(token, now)
    }
}
