//! Todo persistence.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::storage::StoreResult;

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub is_finished: bool,
}

/// Fields accepted when creating or updating a todo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    pub name: String,
    #[serde(default)]
    pub is_finished: bool,
}

pub async fn list_todos(pool: &SqlitePool) -> StoreResult<Vec<Todo>> {
    let todos = sqlx::query_as::<_, Todo>("SELECT id, name, is_finished FROM todos ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(todos)
}

pub async fn get_todo(pool: &SqlitePool, id: i64) -> StoreResult<Option<Todo>> {
    let todo = sqlx::query_as::<_, Todo>("SELECT id, name, is_finished FROM todos WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(todo)
}

/// Insert a todo and return the stored row.
pub async fn create_todo(pool: &SqlitePool, input: &TodoInput) -> StoreResult<Todo> {
    let result = sqlx::query("INSERT INTO todos (name, is_finished) VALUES (?, ?)")
        .bind(&input.name)
        .bind(input.is_finished)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();
    Ok(Todo {
        id,
        name: input.name.clone(),
        is_finished: input.is_finished,
    })
}

/// Update a todo. Returns `None` when no row has this id.
pub async fn update_todo(pool: &SqlitePool, id: i64, input: &TodoInput) -> StoreResult<Option<Todo>> {
    let result = sqlx::query("UPDATE todos SET name = ?, is_finished = ? WHERE id = ?")
        .bind(&input.name)
        .bind(input.is_finished)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_todo(pool, id).await
}

/// Delete a todo. Returns whether a row was removed.
pub async fn delete_todo(pool: &SqlitePool, id: i64) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
