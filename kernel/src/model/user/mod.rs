pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub location: String,
    pub sustainability_score: i64,
    pub items_shared: i64,
    pub items_received: i64,
    pub created_at: DateTime<Utc>,
}
