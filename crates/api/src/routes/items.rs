//! Route definitions for the `/items` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// ```text
/// GET, POST          /items/              -> list, create
/// GET, PUT, DELETE   /items/{id}          -> get_by_id, update, delete
/// PUT                /items/{id}/toggle   -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items/", get(items::list).post(items::create))
        .route("/items", get(items::list).post(items::create))
        .route(
            "/items/{id}",
            get(items::get_by_id)
                .put(items::update)
                .delete(items::delete),
        )
        .route("/items/{id}/toggle", put(items::toggle))
}
