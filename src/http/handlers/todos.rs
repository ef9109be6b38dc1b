//! Todo API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::http::response::{Analyzed, ApiError};
use crate::http::server::AppState;
use crate::storage::{todos, TodoInput};

fn validate(input: &TodoInput) -> Result<(), ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name is required".to_string()));
    }
    Ok(())
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Analyzed, ApiError> {
    let todos = todos::list_todos(&state.pool).await?;
    Ok(Analyzed::ok(json!({ "todos": todos })))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<Analyzed, ApiError> {
    validate(&input)?;
    let todo = todos::create_todo(&state.pool, &input).await?;
    tracing::debug!(id = todo.id, "Todo created");
    Ok(Analyzed::new(StatusCode::CREATED, json!({ "todo": todo })))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TodoInput>,
) -> Result<Analyzed, ApiError> {
    validate(&input)?;
    let todo = todos::update_todo(&state.pool, id, &input)
        .await?
        .ok_or(ApiError::NotFound("todo"))?;
    Ok(Analyzed::ok(json!({ "todo": todo })))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Analyzed, ApiError> {
    if !todos::delete_todo(&state.pool, id).await? {
        return Err(ApiError::NotFound("todo"));
    }
    tracing::debug!(id, "Todo deleted");
    Ok(Analyzed::ok(json!({ "deleted": true })))
}
