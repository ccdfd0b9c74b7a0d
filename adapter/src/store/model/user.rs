use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, user::User};

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub location: String,
    pub sustainability_score: i64,
    pub items_shared: i64,
    pub items_received: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            id,
            name,
            email,
            location,
            sustainability_score,
            items_shared,
            items_received,
            created_at,
        } = value;
        User {
            id,
            name,
            email,
            location,
            sustainability_score,
            items_shared,
            items_received,
            created_at,
        }
    }
}
