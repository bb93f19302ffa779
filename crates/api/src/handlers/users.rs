//! Handlers for the `/users` resource.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::pagination::PageParams;
use todo_core::types::DbId;
use todo_db::models::item::ItemResponse;
use todo_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use todo_db::repositories::{ItemRepo, UserRepo};
use todo_db::DbPool;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /users/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Request body for `PUT /users/{id}`. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
}

/// POST /users/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(email_taken());
    }

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            hashed_password: hash_password(&input.password)?,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(Json(UserResponse::new(user, Vec::new())))
}

/// GET /users/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let (offset, limit) = params.resolve();
    let users = UserRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(with_items(&state.pool, users).await?))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(single_with_items(&state.pool, user).await?))
}

/// PUT /users/{id}
///
/// Partial update: only the supplied fields change. A new password is
/// re-hashed; a new email already held by another user is rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;

    if UserRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    if let Some(email) = input.email.as_deref() {
        let holder = UserRepo::find_by_email(&state.pool, email).await?;
        if holder.is_some_and(|other| other.id != id) {
            return Err(email_taken());
        }
    }

    let changes = UpdateUser {
        email: input.email,
        hashed_password: input.password.as_deref().map(hash_password).transpose()?,
    };
    let user = UserRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.id, "User updated");

    Ok(Json(single_with_items(&state.pool, user).await?))
}

/// DELETE /users/{id}
///
/// Returns the removed user together with the items that were deleted with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let items = ItemRepo::list_for_owners(&state.pool, &[id]).await?;
    let user = UserRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.id, items = items.len(), "User deleted");

    let items = items.into_iter().map(ItemResponse::from).collect();
    Ok(Json(UserResponse::new(user, items)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

fn email_taken() -> AppError {
    AppError::Core(CoreError::Conflict("Email already registered".into()))
}

async fn single_with_items(pool: &DbPool, user: User) -> AppResult<UserResponse> {
    let mut responses = with_items(pool, vec![user]).await?;
    responses
        .pop()
        .ok_or_else(|| AppError::InternalError("user vanished while loading items".into()))
}

/// Attach owned items to each user using one items query for the whole page.
async fn with_items(pool: &DbPool, users: Vec<User>) -> AppResult<Vec<UserResponse>> {
    let ids: Vec<DbId> = users.iter().map(|u| u.id).collect();
    let mut by_owner: HashMap<DbId, Vec<ItemResponse>> = HashMap::new();
    for item in ItemRepo::list_for_owners(pool, &ids).await? {
        by_owner.entry(item.owner_id).or_default().push(item.into());
    }

    Ok(users
        .into_iter()
        .map(|user| {
            let items = by_owner.remove(&user.id).unwrap_or_default();
            UserResponse::new(user, items)
        })
        .collect())
}
