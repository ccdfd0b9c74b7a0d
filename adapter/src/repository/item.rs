use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::ItemId,
    item::{event::CreateItem, Item, ItemFilter, ItemOwner},
};
use kernel::repository::item::ItemRepository;
use shared::error::AppResult;
use tracing::warn;

use crate::store::{model::item::ItemRow, RecordStore};

/// Sustainability score credited to the owner for each shared item.
const SHARE_SCORE_CREDIT: i64 = 10;

#[derive(new)]
pub struct ItemRepositoryImpl {
    db: RecordStore,
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn create(&self, event: CreateItem) -> AppResult<Item> {
        let row = ItemRow {
            id: ItemId::new(),
            title: event.title,
            description: event.description,
            category: event.category,
            size: event.size,
            condition: event.condition,
            images: event.images,
            owned_by: event.owner,
            location: event.location,
            available: true,
            tags: event.tags,
            sustainability_impact: event.sustainability_impact,
            created_at: Utc::now(),
        };
        self.db.items().write().await.push(row.clone());

        // The credit follows the item write and is not atomic with it.
        // An owner that does not resolve leaves the item in place.
        let mut users = self.db.users().write().await;
        let owner = match users.iter_mut().find(|user| user.id == row.owned_by) {
            Some(user) => {
                user.items_shared += 1;
                user.sustainability_score += SHARE_SCORE_CREDIT;
                Some(ItemOwner {
                    id: user.id,
                    name: user.name.clone(),
                })
            }
            None => {
                warn!(owner = %row.owned_by, "item owner not found, share credit skipped");
                None
            }
        };

        Ok(row.into_item(owner))
    }

    async fn find_available(&self, filter: ItemFilter) -> AppResult<Vec<Item>> {
        let items = self.db.items().read().await;
        let users = self.db.users().read().await;

        let mut rows: Vec<&ItemRow> = items
            .iter()
            .filter(|row| row.available && matches_filter(row, &filter))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(rows
            .into_iter()
            .map(|row| {
                let owner = users.iter().find(|user| user.id == row.owned_by).map(|user| {
                    ItemOwner {
                        id: user.id,
                        name: user.name.clone(),
                    }
                });
                row.clone().into_item(owner)
            })
            .collect())
    }
}

/// Category matches exactly; location and title search are
/// case-insensitive substring matches.
fn matches_filter(row: &ItemRow, filter: &ItemFilter) -> bool {
    if let Some(category) = &filter.category {
        if row.category != *category {
            return false;
        }
    }
    if let Some(location) = &filter.location {
        if !row.location.to_lowercase().contains(&location.to_lowercase()) {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        if !row.title.to_lowercase().contains(&search.to_lowercase()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use kernel::model::{
        id::UserId,
        item::Condition,
        user::event::CreateUser,
    };
    use kernel::repository::user::UserRepository;

    use super::*;
    use crate::repository::user::UserRepositoryImpl;

    fn listing(title: &str, category: &str, location: &str, owner: UserId) -> CreateItem {
        CreateItem {
            title: title.into(),
            description: "well kept".into(),
            category: category.into(),
            size: "M".into(),
            condition: Condition::Good,
            images: vec![],
            owner,
            location: location.into(),
            tags: vec![],
            sustainability_impact: 11,
        }
    }

    async fn registered_user(store: &RecordStore, email: &str) -> UserId {
        let repo = UserRepositoryImpl::new(store.clone());
        repo.create(CreateUser {
            name: "Mike".into(),
            email: email.into(),
            location: "Midtown".into(),
        })
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_share_credits_the_owner() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let owner = registered_user(&store, "mike@example.com").await;
        let repo = ItemRepositoryImpl::new(store.clone());

        let item = repo.create(listing("Denim Jacket", "outerwear", "Downtown", owner)).await?;
        assert!(item.available);
        assert_eq!(item.owner.as_ref().map(|o| o.id), Some(owner));

        let users = UserRepositoryImpl::new(store.clone());
        let user = users.find_by_id(owner).await?.unwrap();
        assert_eq!(user.items_shared, 1);
        assert_eq!(user.sustainability_score, 10);

        repo.create(listing("Wool Coat", "outerwear", "Downtown", owner)).await?;
        let user = users.find_by_id(owner).await?.unwrap();
        assert_eq!(user.items_shared, 2);
        assert_eq!(user.sustainability_score, 20);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_owner_does_not_abort_the_share() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let repo = ItemRepositoryImpl::new(store.clone());

        let item = repo
            .create(listing("Orphan Scarf", "accessories", "Uptown", UserId::new()))
            .await?;
        assert!(item.owner.is_none());
        assert_eq!(store.items().read().await.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_filter_semantics() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let owner = registered_user(&store, "mike@example.com").await;
        let repo = ItemRepositoryImpl::new(store.clone());

        repo.create(listing("Running Shoes", "shoes", "Downtown", owner)).await?;
        repo.create(listing("Leather Boots", "shoes", "Midtown", owner)).await?;
        repo.create(listing("Summer Dress", "dresses", "Downtown", owner)).await?;

        // No predicates: every available item, newest first.
        let all = repo.find_available(ItemFilter::default()).await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "Summer Dress");
        assert_eq!(all[2].title, "Running Shoes");

        // Category is an exact, case-sensitive match.
        let shoes = repo
            .find_available(ItemFilter {
                category: Some("shoes".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(shoes.len(), 2);
        let none = repo
            .find_available(ItemFilter {
                category: Some("Shoes".into()),
                ..Default::default()
            })
            .await?;
        assert!(none.is_empty());

        // Location is a case-insensitive substring match.
        let down = repo
            .find_available(ItemFilter {
                location: Some("DOWN".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(down.len(), 2);

        // Predicates intersect.
        let both = repo
            .find_available(ItemFilter {
                category: Some("shoes".into()),
                location: Some("down".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "Running Shoes");

        // Title search, case-insensitive.
        let boots = repo
            .find_available(ItemFilter {
                search: Some("boots".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(boots.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_unavailable_items_are_never_listed() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let owner = registered_user(&store, "mike@example.com").await;
        let repo = ItemRepositoryImpl::new(store.clone());

        let item = repo.create(listing("Denim Jacket", "outerwear", "Downtown", owner)).await?;
        store
            .items()
            .write()
            .await
            .iter_mut()
            .find(|row| row.id == item.id)
            .unwrap()
            .available = false;

        let listed = repo.find_available(ItemFilter::default()).await?;
        assert!(listed.is_empty());

        Ok(())
    }
}
