//! Response types shared by handlers.
//!
//! # Responsibilities
//! - Carry an analyzed JSON payload until the exchange is finalized
//! - Map handler errors to HTTP status codes and JSON bodies
//!
//! # Design Decisions
//! - Analyzed handlers never serialize their own body; the analysis
//!   middleware renders it once the response headers are final
//! - Storage failures are logged, clients only see a generic message

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::storage::StoreError;

/// JSON payload waiting for the exchange report. Stored as a response
/// extension and consumed by the analysis middleware.
#[derive(Debug, Clone)]
pub struct PendingBody(pub Map<String, Value>);

/// Handler output whose body is rendered after header analysis.
#[derive(Debug, Clone)]
pub struct Analyzed {
    status: StatusCode,
    payload: Map<String, Value>,
}

impl Analyzed {
    /// `payload` should be a JSON object; other values are wrapped as `data`.
    pub fn new(status: StatusCode, payload: Value) -> Self {
        let payload = match payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        Self { status, payload }
    }

    pub fn ok(payload: Value) -> Self {
        Self::new(StatusCode::OK, payload)
    }
}

impl IntoResponse for Analyzed {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        response.extensions_mut().insert(PendingBody(self.payload));
        response
    }
}

/// Errors returned by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(e) => {
                tracing::error!(error = %e, "Storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            ApiError::Store(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
