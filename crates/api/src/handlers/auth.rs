//! Handlers for login, logout, and session deletion.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::session_token;
use todo_db::models::session::CreateSession;
use todo_db::repositories::{SessionRepo, UserRepo};

use crate::auth::cookies;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::{LoginResponse, MessageResponse};
use crate::state::AppState;

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login
///
/// Check the email/password pair, open a new session, and hand its token
/// back both in the body and as the `session_id` cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    if !verify_password(&input.password, &user.hashed_password)? {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token: session_token::generate(),
        },
    )
    .await?;
    tracing::info!(user_id = user.id, session_id = session.id, "Session created");

    let jar = cookies::set_session(jar, session.token.clone());
    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            user_id: user.id,
            session_id: session.token,
        }),
    ))
}

/// POST /logout
///
/// Delete the session named by the `session_id` cookie, if any. Always succeeds.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    if let Some(token) = cookies::session_token(&jar) {
        if let Some(session) = SessionRepo::delete_by_token(&state.pool, &token).await? {
            tracing::info!(user_id = session.user_id, "Session ended by logout");
        }
    }

    Ok((
        cookies::clear_session(jar),
        Json(MessageResponse {
            message: "Logout successful",
        }),
    ))
}

/// DELETE /session/{token}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(token): Path<String>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let session = SessionRepo::delete_by_token(&state.pool, &token)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundKey { entity: "Session" }))?;
    tracing::info!(user_id = session.user_id, "Session deleted");

    Ok((
        cookies::clear_session(jar),
        Json(MessageResponse {
            message: "Session deleted successfully",
        }),
    ))
}
