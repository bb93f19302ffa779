//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{items, users};
use crate::state::AppState;

/// ```text
/// GET, POST          /users/             -> list, create
/// GET, PUT, DELETE   /users/{id}         -> get_by_id, update, delete
/// GET                /users/{id}/items/  -> items::list_by_owner
/// ```
///
/// The collection routes also answer without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/", get(users::list).post(users::create))
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
        .route("/users/{id}/items/", get(items::list_by_owner))
        .route("/users/{id}/items", get(items::list_by_owner))
}
