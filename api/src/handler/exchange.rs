use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::ExchangeId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::exchange::{CreateExchangeRequest, ExchangeResponse};

pub async fn register_exchange(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateExchangeRequest>,
) -> AppResult<(StatusCode, Json<ExchangeResponse>)> {
    registry
        .exchange_repository()
        .create(req.into())
        .await
        .map(|exchange| (StatusCode::CREATED, Json(exchange.into())))
}

pub async fn complete_exchange(
    Path(exchange_id): Path<ExchangeId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ExchangeResponse>> {
    registry
        .exchange_repository()
        .complete(exchange_id)
        .await
        .map(|exchange| Json(exchange.into()))
}
