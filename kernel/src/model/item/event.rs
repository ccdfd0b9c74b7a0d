use crate::model::{id::UserId, item::Condition};

#[derive(Debug)]
pub struct CreateItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: Condition,
    pub images: Vec<String>,
    pub owner: UserId,
    pub location: String,
    pub tags: Vec<String>,
    pub sustainability_impact: i64,
}
