//! SQLite pool setup and schema creation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::storage::StoreResult;

/// Open the pool described by `config` and make sure the tables exist.
pub async fn init_pool(config: &DatabaseConfig) -> StoreResult<SqlitePool> {
    let in_memory = config.url.contains(":memory:");
    let max_connections = if in_memory { 1 } else { config.max_connections };
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    // Every connection to ":memory:" is a separate database, so keep exactly one alive.
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    if !in_memory {
        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
    }

    create_tables(&pool).await?;

    tracing::info!(
        url = %config.url,
        max_connections,
        "Database ready"
    );

    Ok(pool)
}

/// Create the `todos` and `list_entries` tables if they don't exist.
pub async fn create_tables(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            is_finished BOOLEAN NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS list_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
