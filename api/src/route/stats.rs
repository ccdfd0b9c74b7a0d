use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::stats::show_sustainability_stats;

pub fn build_stats_routers() -> Router<AppRegistry> {
    Router::new().route("/sustainability-stats", get(show_sustainability_stats))
}
