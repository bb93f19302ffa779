//! To-do item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;
use validator::Validate;

/// Full item row from the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub owner_id: DbId,
    pub is_completed: bool,
}

/// Public item representation. Owner and completion state are not part of
/// the output schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    pub id: DbId,
    pub title: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
        }
    }
}

/// DTO for creating a new item. New items always start incomplete.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub owner_id: DbId,
}

/// DTO for a partial item update. Omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
}
