//! Generic list handlers (form based).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Form,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::response::{Analyzed, ApiError};
use crate::http::server::AppState;
use crate::storage::list;

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub text: String,
}

pub async fn index() -> Redirect {
    Redirect::to("/list")
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Analyzed, ApiError> {
    let entries = list::list_entries(&state.pool).await?;
    Ok(Analyzed::ok(json!({ "entries": entries })))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Analyzed, ApiError> {
    let text = form.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text is required".to_string()));
    }
    let entry = list::add_entry(&state.pool, text).await?;
    Ok(Analyzed::new(StatusCode::CREATED, json!({ "entry": entry })))
}

/// Delete and go back to the list, like the HTML form flow expects.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    if !list::delete_entry(&state.pool, id).await? {
        tracing::debug!(id, "List entry already gone");
    }
    Ok(Redirect::to("/list"))
}
