use axum::routing::get;
use axum::Router;

use catalog_application::AppState;

use crate::handlers::{image_handlers, item_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops_handlers::root))
        .route(
            "/items",
            get(item_handlers::list_items).post(item_handlers::add_item),
        )
        .route("/items/:id", get(item_handlers::get_item))
        .route("/search", get(item_handlers::search_items))
        .route("/images/:name", get(image_handlers::get_image))
        .route("/metrics", get(ops_handlers::metrics_prometheus))
        .with_state(state)
}
