//! Database setup and initialization.
//!
//! Entry points call [`setup_database`] with the configured database URL.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

/// Sets up the `SQLite` connection pool and ensures the schema exists.
///
/// Accepts any `sqlx` `SQLite` URL (`sqlite:todos.db`, `sqlite::memory:`).
/// The database file is created if it doesn't exist.
///
/// # Example
///
/// ```rust,no_run
/// use todo_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database("sqlite:todos.db").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database URL '{database_url}'"))?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("failed to open database '{database_url}'"))?;

    create_schema(&pool).await?;
    tracing::debug!(database_url, "database schema ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    // A single connection, since every new in-memory connection is a new database.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            done BOOLEAN NOT NULL DEFAULT 0
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
