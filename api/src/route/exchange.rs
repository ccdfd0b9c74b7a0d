use axum::{
    routing::{post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::exchange::{complete_exchange, register_exchange};

pub fn build_exchange_routers() -> Router<AppRegistry> {
    let exchanges_routers = Router::new()
        .route("/", post(register_exchange))
        .route("/:exchange_id/complete", put(complete_exchange));

    Router::new().nest("/exchanges", exchanges_routers)
}
