//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Token version every account starts with.
pub const INITIAL_TOKEN_VERSION: i32 = 0;

/// A registered account.
///
/// Created on registration and mutated only by password changes; never
/// deleted by the authentication core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, assigned by the store.
    pub id: Uuid,
    /// Unique login name.
    pub login: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Incremented on every password change; tokens carrying an older
    /// value are rejected.
    pub token_version: i32,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a freshly registered user with the baseline token version.
    pub fn new(id: Uuid, login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            login: login.into(),
            password_hash: password_hash.into(),
            token_version: INITIAL_TOKEN_VERSION,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a token stamped with `version` is still current for this user.
    pub fn accepts_token_version(&self, version: i32) -> bool {
        self.token_version == version
    }
}
