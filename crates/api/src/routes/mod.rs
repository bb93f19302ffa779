pub mod auth;
pub mod health;
pub mod items;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (all at the root, no version prefix):
///
/// ```text
/// /login                     login (POST)
/// /logout                    logout (POST)
/// /session/{token}           delete session (DELETE)
///
/// /users/                    list, create
/// /users/{id}                get, update, delete
/// /users/{id}/items/         list items owned by the user
///
/// /items/                    list, create
/// /items/{id}                get, update, delete
/// /items/{id}/toggle         flip completion (PUT)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(items::router())
}
