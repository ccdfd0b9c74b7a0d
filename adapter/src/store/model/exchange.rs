use chrono::{DateTime, Utc};
use kernel::model::{
    exchange::{Exchange, ExchangeStatus},
    id::{ExchangeId, ItemId, UserId},
};

#[derive(Debug, Clone)]
pub struct ExchangeRow {
    pub id: ExchangeId,
    pub requester: UserId,
    pub owner: Option<UserId>,
    pub item: ItemId,
    pub status: ExchangeStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ExchangeRow> for Exchange {
    fn from(value: ExchangeRow) -> Self {
        let ExchangeRow {
            id,
            requester,
            owner,
            item,
            status,
            message,
            created_at,
        } = value;
        Exchange {
            id,
            requester,
            owner,
            item,
            status,
            message,
            created_at,
        }
    }
}
