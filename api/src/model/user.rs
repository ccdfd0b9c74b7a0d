use chrono::{DateTime, Utc};
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            name,
            email,
            location,
        } = value;
        CreateUser {
            name,
            email,
            location,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub location: String,
    pub sustainability_score: i64,
    pub items_shared: i64,
    pub items_received: i64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            location,
            sustainability_score,
            items_shared,
            items_received,
            created_at,
        } = value;
        Self {
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
