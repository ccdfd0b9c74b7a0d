use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::store::{model::user::UserRow, RecordStore};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: RecordStore,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut users = self.db.users().write().await;

        // Uniqueness check and insert happen under the same write lock.
        if users.iter().any(|row| row.email == event.email) {
            return Err(AppError::ConflictError(format!(
                "email already registered: {}",
                event.email
            )));
        }

        let row = UserRow {
            id: UserId::new(),
            name: event.name,
            email: event.email,
            location: event.location,
            sustainability_score: 0,
            items_shared: 0,
            items_received: 0,
            created_at: Utc::now(),
        };
        users.push(row.clone());

        Ok(User::from(row))
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let users = self.db.users().read().await;
        Ok(users
            .iter()
            .find(|row| row.id == user_id)
            .cloned()
            .map(User::from))
    }
}
