//! Claims structure carried by every issued token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity asserted by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// The user's ID.
    pub user_id: Uuid,
    /// The user's login at issuance time.
    pub login: String,
}

impl Subject {
    /// Creates a subject for the given user.
    pub fn new(user_id: Uuid, login: impl Into<String>) -> Self {
        Self {
            user_id,
            login: login.into(),
        }
    }
}

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// Login for convenience.
    pub login: String,
    /// The user's token version observed at issuance.
    pub token_version: i32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the identity part of the claims.
    pub fn subject(&self) -> Subject {
        Subject::new(self.sub, self.login.clone())
    }

    /// Whether the token is expired at `now` (expiry is exclusive).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
