//! Repository for the `sessions` table.

use sqlx::SqlitePool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token, user_id";

/// Provides create/lookup/delete operations for login sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (token, user_id)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.token)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its token.
    pub async fn find_by_token(
        pool: &SqlitePool,
        token: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE token = ?");
        sqlx::query_as::<_, Session>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session holding `token`, returning the removed row.
    pub async fn delete_by_token(
        pool: &SqlitePool,
        token: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("DELETE FROM sessions WHERE token = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Session>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }
}
