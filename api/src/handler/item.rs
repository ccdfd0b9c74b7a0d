use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::item::{CreateItemRequest, ItemListQuery, ItemResponse};

pub async fn register_item(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    registry
        .item_repository()
        .create(req.into())
        .await
        .map(|item| (StatusCode::CREATED, Json(item.into())))
}

pub async fn show_item_list(
    Query(query): Query<ItemListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    registry
        .item_repository()
        .find_available(query.into())
        .await
        .map(|items| Json(items.into_iter().map(ItemResponse::from).collect()))
}
