//! `UserStore` backed by the PostgreSQL user repository.

use async_trait::async_trait;
use uuid::Uuid;

use countrydesk_core::result::AppResult;
use countrydesk_database::repositories::UserRepository;
use countrydesk_entity::user::User;

use super::UserStore;

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, login: &str, password_hash: &str) -> AppResult<Uuid> {
        UserRepository::create(self, login, password_hash)
            .await
            .map(|user| user.id)
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_login(self, login).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }

    async fn update_password(&self, id: Uuid, new_hash: &str) -> AppResult<i32> {
        UserRepository::update_password(self, id, new_hash).await
    }

    async fn compare_and_update_password(
        &self,
        id: Uuid,
        expected_version: i32,
        new_hash: &str,
    ) -> AppResult<Option<i32>> {
        UserRepository::compare_and_update_password(self, id, expected_version, new_hash).await
    }
}
