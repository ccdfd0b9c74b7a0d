use std::sync::Arc;

use tokio::sync::RwLock;

use self::model::{exchange::ExchangeRow, item::ItemRow, user::UserRow};

pub mod model;

/// Handle to the three record collections. Cheap to clone; created once
/// at bootstrap and injected into the repositories, dropped at shutdown.
///
/// Each collection sits behind its own lock, so a multi-collection write
/// (item creation plus owner credit) is not atomic across collections.
#[derive(Clone)]
pub struct RecordStore(Arc<Collections>);

#[derive(Default)]
struct Collections {
    users: RwLock<Vec<UserRow>>,
    items: RwLock<Vec<ItemRow>>,
    exchanges: RwLock<Vec<ExchangeRow>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self(Arc::new(Collections::default()))
    }

    pub fn users(&self) -> &RwLock<Vec<UserRow>> {
        &self.0.users
    }

    pub fn items(&self) -> &RwLock<Vec<ItemRow>> {
        &self.0.items
    }

    pub fn exchanges(&self) -> &RwLock<Vec<ExchangeRow>> {
        &self.0.exchanges
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
