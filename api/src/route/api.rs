use axum::Router;
use registry::AppRegistry;

use super::{
    exchange::build_exchange_routers, health::build_health_check_routers, item::build_item_routers,
    stats::build_stats_routers, user::build_user_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_item_routers())
        .merge(build_user_routers())
        .merge(build_exchange_routers())
        .merge(build_stats_routers());
    Router::new().nest("/api", router)
}
