//! Repository for the `items` table.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use todo_core::types::DbId;

use crate::models::item::{CreateItem, Item, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, owner_id, is_completed";

/// Provides CRUD operations for to-do items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new, not yet completed item, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (title, owner_id, is_completed)
             VALUES (?, ?, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.title)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// List all items in id order with offset/limit paging.
    pub async fn list(pool: &SqlitePool, offset: i64, limit: i64) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Item>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List the items owned by one user with offset/limit paging.
    pub async fn list_by_owner(
        pool: &SqlitePool,
        owner_id: DbId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE owner_id = ?
             ORDER BY id
             LIMIT ? OFFSET ?"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch every item owned by any of `owner_ids` in a single query.
    pub async fn list_for_owners(
        pool: &SqlitePool,
        owner_ids: &[DbId],
    ) -> Result<Vec<Item>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM items WHERE owner_id IN ("));
        let mut separated = builder.separated(", ");
        for owner_id in owner_ids {
            separated.push_bind(*owner_id);
        }
        separated.push_unseparated(") ORDER BY id");

        builder.build_query_as::<Item>().fetch_all(pool).await
    }

    /// Find an item by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = ?");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                title = COALESCE(?, title)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.title)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_completed` in place.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_completed(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET is_completed = NOT is_completed
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, returning the removed row.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("DELETE FROM items WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
