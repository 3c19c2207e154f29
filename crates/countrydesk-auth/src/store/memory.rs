//! In-memory user store using a Tokio read-write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use countrydesk_core::error::AppError;
use countrydesk_core::result::AppResult;
use countrydesk_database::repositories::user::DUPLICATE_LOGIN_MESSAGE;
use countrydesk_entity::user::User;

use super::UserStore;

/// Internal state for the memory-based store.
#[derive(Debug, Default)]
struct InnerState {
    /// Users keyed by ID.
    users: HashMap<Uuid, User>,
    /// Login → ID index; doubles as the uniqueness constraint.
    by_login: HashMap<String, Uuid>,
}

/// In-memory user store.
///
/// Suitable for tests and single-process runs without a database. Check
/// and insert happen under one write lock, so duplicate logins cannot race.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Protected inner state.
    state: Arc<RwLock<InnerState>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Applies a password change in place and returns the new version.
fn apply_password_change(user: &mut User, new_hash: &str) -> i32 {
    user.password_hash = new_hash.to_string();
    user.token_version += 1;
    user.updated_at = Utc::now();
    user.token_version
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, login: &str, password_hash: &str) -> AppResult<Uuid> {
        let mut state = self.state.write().await;

        if state.by_login.contains_key(login) {
            return Err(AppError::conflict(DUPLICATE_LOGIN_MESSAGE));
        }

        let user = User::new(Uuid::new_v4(), login, password_hash);
        let id = user.id;
        state.by_login.insert(login.to_string(), id);
        state.users.insert(id, user);

        Ok(id)
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .by_login
            .get(login)
            .and_then(|id| state.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn update_password(&self, id: Uuid, new_hash: &str) -> AppResult<i32> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        Ok(apply_password_change(user, new_hash))
    }

    async fn compare_and_update_password(
        &self,
        id: Uuid,
        expected_version: i32,
        new_hash: &str,
    ) -> AppResult<Option<i32>> {
        let mut state = self.state.write().await;
        Ok(state
            .users
            .get_mut(&id)
            .filter(|user| user.token_version == expected_version)
            .map(|user| apply_password_change(user, new_hash)))
    }
}
