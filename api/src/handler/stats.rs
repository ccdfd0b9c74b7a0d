use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::stats::SustainabilityStatsResponse;

pub async fn show_sustainability_stats(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SustainabilityStatsResponse>> {
    registry
        .stats_repository()
        .summarize()
        .await
        .map(|stats| Json(stats.into()))
}
