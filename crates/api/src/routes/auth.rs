//! Route definitions for login and session management.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST   /login            -> login
/// POST   /logout           -> logout
/// DELETE /session/{token}  -> delete_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session/{token}", delete(auth::delete_session))
}
