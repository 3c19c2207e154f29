//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use countrydesk_core::error::{AppError, ErrorKind};
use countrydesk_core::result::AppResult;
use countrydesk_entity::user::User;

/// Name of the unique constraint on `users.login`.
const LOGIN_UNIQUE_CONSTRAINT: &str = "users_login_key";

/// Message returned when a login is already taken.
pub const DUPLICATE_LOGIN_MESSAGE: &str = "User with this login already exists";

/// Repository for user account rows.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by login (exact match).
    pub async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by login", e)
            })
    }

    /// Create a new user with the baseline token version.
    ///
    /// The login is checked before inserting; the `users_login_key`
    /// constraint catches registrations that race past the check, and
    /// both paths surface as the same conflict.
    pub async fn create(&self, login: &str, password_hash: &str) -> AppResult<User> {
        let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE login = $1)")
            .bind(login)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check login", e)
            })?;

        if taken {
            return Err(AppError::conflict(DUPLICATE_LOGIN_MESSAGE));
        }

        sqlx::query_as::<_, User>(
            "INSERT INTO users (login, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(login)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)
    }

    /// Replace the password hash and bump the token version.
    ///
    /// Both columns change in one statement, so no reader can observe one
    /// without the other. Returns the new token version.
    pub async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE users SET password_hash = $2, token_version = token_version + 1, \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING token_version",
        )
        .bind(user_id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Same as [`update_password`](Self::update_password), but only when the
    /// stored token version still equals `expected_version`.
    ///
    /// Returns `None` when the row is missing or its version has moved on.
    pub async fn compare_and_update_password(
        &self,
        user_id: Uuid,
        expected_version: i32,
        password_hash: &str,
    ) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE users SET password_hash = $3, token_version = token_version + 1, \
                              updated_at = NOW() \
             WHERE id = $1 AND token_version = $2 RETURNING token_version",
        )
        .bind(user_id)
        .bind(expected_version)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))
    }
}

/// Map an `INSERT INTO users` failure, turning a lost race on the login
/// constraint into the same conflict as the pre-insert check.
fn insert_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(LOGIN_UNIQUE_CONSTRAINT) =>
        {
            AppError::conflict(DUPLICATE_LOGIN_MESSAGE)
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
    }
}
