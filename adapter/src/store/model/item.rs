use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ItemId, UserId},
    item::{Condition, Item, ItemOwner},
};

#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: Condition,
    pub images: Vec<String>,
    pub owned_by: UserId,
    pub location: String,
    pub available: bool,
    pub tags: Vec<String>,
    pub sustainability_impact: i64,
    pub created_at: DateTime<Utc>,
}

impl ItemRow {
    /// The owner is a soft reference, so the expanded form is resolved
    /// by the caller and may be absent.
    pub fn into_item(self, owner: Option<ItemOwner>) -> Item {
        let ItemRow {
            id,
            title,
            description,
            category,
            size,
            condition,
            images,
            owned_by: _,
            location,
            available,
            tags,
            sustainability_impact,
            created_at,
        } = self;
        Item {
            id,
            title,
            description,
            category,
            size,
            condition,
            images,
            owner,
            location,
            available,
            tags,
            sustainability_impact,
            created_at,
        }
    }
}
