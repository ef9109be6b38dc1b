//! Route handlers.

pub mod list;
pub mod todos;

use std::sync::Arc;

use axum::{Extension, Json};
use serde::Serialize;

use crate::http::middleware::RequestAnalysis;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// Echo the inbound analysis of this very request.
pub async fn show_headers(
    Extension(analysis): Extension<Arc<RequestAnalysis>>,
) -> Json<RequestAnalysis> {
    Json(RequestAnalysis::clone(&analysis))
}
