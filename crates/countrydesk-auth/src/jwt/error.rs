//! Token verification failures.

use thiserror::Error;

/// Why a presented token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signature is valid but the expiration time has passed.
    #[error("token has expired")]
    Expired,
    /// Signature, algorithm, or structure checks failed.
    #[error("invalid token: {0}")]
    Invalid(String),
}
