use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ItemId, UserId},
    item::{event::CreateItem, Condition, Item, ItemFilter, ItemOwner},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub images: Vec<String>,
    pub owner: UserId,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sustainability_impact: i64,
}

impl From<CreateItemRequest> for CreateItem {
    fn from(value: CreateItemRequest) -> Self {
        let CreateItemRequest {
            title,
            description,
            category,
            size,
            condition,
            images,
            owner,
            location,
            tags,
            sustainability_impact,
        } = value;
        CreateItem {
            title,
            description,
            category,
            size,
            condition,
            images,
            owner,
            location,
            tags,
            sustainability_impact,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemListQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
}

impl From<ItemListQuery> for ItemFilter {
    fn from(value: ItemListQuery) -> Self {
        let ItemListQuery {
            category,
            location,
            search,
        } = value;
        // An empty parameter behaves like an absent one.
        ItemFilter {
            category: not_blank(category),
            location: not_blank(location),
            search: not_blank(search),
        }
    }
}

fn not_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: Condition,
    pub images: Vec<String>,
    pub owner: Option<ItemOwnerResponse>,
    pub location: String,
    pub available: bool,
    pub tags: Vec<String>,
    pub sustainability_impact: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOwnerResponse {
    pub id: UserId,
    pub name: String,
}

impl From<ItemOwner> for ItemOwnerResponse {
    fn from(value: ItemOwner) -> Self {
        let ItemOwner { id, name } = value;
        Self { id, name }
    }
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        let Item {
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
        } = value;
        Self {
            id,
            title,
            description,
            category,
            size,
            condition,
            images,
            owner: owner.map(ItemOwnerResponse::from),
            location,
            available,
            tags,
            sustainability_impact,
            created_at,
        }
    }
}
