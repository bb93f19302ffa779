//! Handlers for the `/items` resource and the per-user item listing.

use axum::extract::{Path, Query, State};
use axum::Json;
use todo_core::error::CoreError;
use todo_core::pagination::PageParams;
use todo_core::types::DbId;
use todo_db::models::item::{CreateItem, ItemResponse, UpdateItem};
use todo_db::repositories::ItemRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

/// POST /items/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<Json<ItemResponse>> {
    input.validate()?;
    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = item.id, owner_id = item.owner_id, "Item created");
    Ok(Json(item.into()))
}

/// GET /items/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    let (offset, limit) = params.resolve();
    let items = ItemRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /users/{id}/items/
///
/// An unknown user simply owns no items.
pub async fn list_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    let (offset, limit) = params.resolve();
    let items = ItemRepo::list_by_owner(&state.pool, owner_id, offset, limit).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item.into()))
}

/// PUT /items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<ItemResponse>> {
    input.validate()?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item.into()))
}

/// DELETE /items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse>> {
    let item = ItemRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(item_id = item.id, "Item deleted");
    Ok(Json(item.into()))
}

/// PUT /items/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse>> {
    let item = ItemRepo::toggle_completed(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::debug!(item_id = item.id, is_completed = item.is_completed, "Item toggled");
    Ok(Json(item.into()))
}
