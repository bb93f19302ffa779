//! Login session model and DTOs.

use sqlx::FromRow;
use todo_core::types::DbId;

/// A session row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub token: String,
    pub user_id: DbId,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token: String,
}
