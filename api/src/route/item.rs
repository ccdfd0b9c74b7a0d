use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::item::{register_item, show_item_list};

pub fn build_item_routers() -> Router<AppRegistry> {
    let items_routers = Router::new()
        .route("/", post(register_item))
        .route("/", get(show_item_list));

    Router::new().nest("/items", items_routers)
}
