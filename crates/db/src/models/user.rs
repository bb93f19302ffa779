//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::DbId;

use crate::models::item::ItemResponse;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub hashed_password: String,
}

/// Safe user representation for API responses, with the items the user owns.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub items: Vec<ItemResponse>,
}

impl UserResponse {
    pub fn new(user: User, items: Vec<ItemResponse>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            items,
        }
    }
}

/// DTO for inserting a user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub hashed_password: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub hashed_password: Option<String>,
}
