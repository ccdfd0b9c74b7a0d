use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::item::{event::CreateItem, Item, ItemFilter};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores the item, then credits the owner's shared-item counters.
    /// The credit is best effort: an owner that does not resolve is
    /// tolerated and never aborts the item write.
    async fn create(&self, event: CreateItem) -> AppResult<Item>;
    /// All available items matching the filter, newest first.
    async fn find_available(&self, filter: ItemFilter) -> AppResult<Vec<Item>>;
}
