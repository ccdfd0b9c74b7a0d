pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::id::{ExchangeId, ItemId, UserId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExchangeStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Exchange {
    pub id: ExchangeId,
    pub requester: UserId,
    /// Derived from the referenced item's owner at creation time.
    /// `None` when the item reference does not resolve.
    pub owner: Option<UserId>,
    pub item: ItemId,
    pub status: ExchangeStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
