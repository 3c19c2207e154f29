//! User record store used by the authentication workflows.
//!
//! Two implementations are provided:
//! - PostgreSQL, via [`UserRepository`](countrydesk_database::repositories::UserRepository)
//! - In-memory, via [`MemoryUserStore`]

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use countrydesk_core::result::AppResult;
use countrydesk_entity::user::User;

pub use memory::MemoryUserStore;

/// Persisted user records keyed by login.
///
/// Implementations must support concurrent readers and apply each
/// password update (hash plus version bump) as one indivisible change.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Create a user with token version 0 and return its ID.
    ///
    /// Fails with a `Conflict` error when the login is already taken.
    async fn create(&self, login: &str, password_hash: &str) -> AppResult<Uuid>;

    /// Find a user by login.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Set a new password hash and increment the token version by one.
    ///
    /// Returns the new token version, or `NotFound` for an unknown ID.
    async fn update_password(&self, id: Uuid, new_hash: &str) -> AppResult<i32>;

    /// Like `update_password`, applied only while the stored token version
    /// equals `expected_version`. Returns `None` when it did not apply.
    async fn compare_and_update_password(
        &self,
        id: Uuid,
        expected_version: i32,
        new_hash: &str,
    ) -> AppResult<Option<i32>>;
}
