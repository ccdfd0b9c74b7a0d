use crate::model::id::{ItemId, UserId};

#[derive(Debug)]
pub struct CreateExchange {
    pub requester: UserId,
    pub item: ItemId,
    pub message: Option<String>,
}
