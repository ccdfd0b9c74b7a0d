use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    exchange::{event::CreateExchange, Exchange, ExchangeStatus},
    id::ExchangeId,
};
use kernel::repository::exchange::ExchangeRepository;
use shared::error::{AppError, AppResult};
use tracing::warn;

use crate::store::{model::exchange::ExchangeRow, RecordStore};

#[derive(new)]
pub struct ExchangeRepositoryImpl {
    db: RecordStore,
}

#[async_trait]
impl ExchangeRepository for ExchangeRepositoryImpl {
    async fn create(&self, event: CreateExchange) -> AppResult<Exchange> {
        // The item is a soft reference: derive the owner when it
        // resolves, file the request regardless.
        let owner = self
            .db
            .items()
            .read()
            .await
            .iter()
            .find(|row| row.id == event.item)
            .map(|row| row.owned_by);

        let row = ExchangeRow {
            id: ExchangeId::new(),
            requester: event.requester,
            owner,
            item: event.item,
            status: ExchangeStatus::Pending,
            message: event.message,
            created_at: Utc::now(),
        };
        self.db.exchanges().write().await.push(row.clone());

        Ok(Exchange::from(row))
    }

    async fn complete(&self, exchange_id: ExchangeId) -> AppResult<Exchange> {
        let mut exchanges = self.db.exchanges().write().await;
        let row = exchanges
            .iter_mut()
            .find(|row| row.id == exchange_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("exchange not found: {exchange_id}")))?;

        if row.status == ExchangeStatus::Completed {
            return Err(AppError::ConflictError(format!(
                "exchange already completed: {exchange_id}"
            )));
        }
        row.status = ExchangeStatus::Completed;
        let row = row.clone();
        drop(exchanges);

        // Follow-up writes mirror the item-share credit: best effort,
        // dangling references are logged and skipped.
        let mut items = self.db.items().write().await;
        match items.iter_mut().find(|item| item.id == row.item) {
            Some(item) => item.available = false,
            None => warn!(item = %row.item, "completed exchange references a missing item"),
        }
        drop(items);

        let mut users = self.db.users().write().await;
        match users.iter_mut().find(|user| user.id == row.requester) {
            Some(user) => user.items_received += 1,
            None => warn!(requester = %row.requester, "completed exchange has an unknown requester"),
        }

        Ok(Exchange::from(row))
    }
}
