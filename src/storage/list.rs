//! Generic text list persistence.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::storage::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ListEntry {
    pub id: i64,
    pub text: String,
}

pub async fn list_entries(pool: &SqlitePool) -> StoreResult<Vec<ListEntry>> {
    let entries = sqlx::query_as::<_, ListEntry>("SELECT id, text FROM list_entries ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(entries)
}

pub async fn add_entry(pool: &SqlitePool, text: &str) -> StoreResult<ListEntry> {
    let result = sqlx::query("INSERT INTO list_entries (text) VALUES (?)")
        .bind(text)
        .execute(pool)
        .await?;

    Ok(ListEntry {
        id: result.last_insert_rowid(),
        text: text.to_string(),
    })
}

/// Returns whether a row was removed.
pub async fn delete_entry(pool: &SqlitePool, id: i64) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM list_entries WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
