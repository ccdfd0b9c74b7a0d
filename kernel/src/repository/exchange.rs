use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    exchange::{event::CreateExchange, Exchange},
    id::ExchangeId,
};

#[async_trait]
pub trait ExchangeRepository: Send + Sync {
    /// Files a pending exchange request. Neither the requester nor the
    /// item reference is required to resolve.
    async fn create(&self, event: CreateExchange) -> AppResult<Exchange>;
    /// Marks the exchange completed, flips the item unavailable and
    /// credits the requester's received counter.
    async fn complete(&self, exchange_id: ExchangeId) -> AppResult<Exchange>;
}
