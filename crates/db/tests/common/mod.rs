use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use todo_db::models::user::{CreateUser, User};
use todo_db::repositories::UserRepo;

/// Open a fresh in-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory pool should open");
    todo_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Insert a user with a placeholder hash.
pub async fn seed_user(pool: &SqlitePool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        hashed_password: "not-a-real-hash".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}
