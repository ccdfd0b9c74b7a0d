use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;

pub async fn health_check(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_store().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
