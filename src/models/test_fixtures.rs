use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::storage::{MemoryStore, SqliteStore};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all tests to ensure
/// consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Key-value store backed by the in-memory SQLite fixture
#[fixture]
pub async fn sqlite_store(#[future] test_db: SqlitePool) -> SqliteStore {
    SqliteStore::new(test_db.await)
}

#[fixture]
pub fn memory_store() -> MemoryStore {
    MemoryStore::new()
}
