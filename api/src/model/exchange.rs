use chrono::{DateTime, Utc};
use kernel::model::{
    exchange::{event::CreateExchange, Exchange, ExchangeStatus},
    id::{ExchangeId, ItemId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExchangeRequest {
    pub requester: UserId,
    pub item: ItemId,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CreateExchangeRequest> for CreateExchange {
    fn from(value: CreateExchangeRequest) -> Self {
        let CreateExchangeRequest {
            requester,
            item,
            message,
        } = value;
        CreateExchange {
            requester,
            item,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
    pub id: ExchangeId,
    pub requester: UserId,
    pub owner: Option<UserId>,
    pub item: ItemId,
    pub status: ExchangeStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Exchange> for ExchangeResponse {
    fn from(value: Exchange) -> Self {
        let Exchange {
            id,
            requester,
            owner,
            item,
            status,
            message,
            created_at,
        } = value;
        Self {
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
