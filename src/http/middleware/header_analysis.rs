//! Header analysis middleware.
//!
//! Analyzes inbound headers when the request arrives and outbound headers once
//! the inner service has produced its final response, then renders pending
//! JSON payloads with both reports attached.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::analysis::{
    analyze_request, analyze_response, explain_headers, CategoryReport, HeaderFields, ParsedHeader,
};
use crate::http::request::RequestIdExt;
use crate::http::response::PendingBody;
use crate::observability::metrics;

/// Settings for the analysis middleware.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    pub log_findings: bool,
}

/// Inbound side of an exchange, computed when the request is received.
///
/// Inserted into request extensions as `Arc<RequestAnalysis>`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAnalysis {
    pub methods: String,
    pub protocol: String,
    pub host: Option<String>,
    pub url: String,
    pub request_report: CategoryReport,
    #[serde(rename = "headers")]
    pub parsed_headers: Vec<ParsedHeader>,
    #[serde(skip)]
    pub request_id: String,
}

impl RequestAnalysis {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let headers = req.headers();
        let fields = HeaderFields::from_header_map(headers);

        let protocol = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .map(|p| p.split(',').next().unwrap_or_default().trim().to_lowercase())
            .or_else(|| req.uri().scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());

        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| req.uri().authority().map(|a| a.to_string()));

        let url = req
            .uri()
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_else(|| req.uri().path().to_string());

        Self {
            methods: req.method().to_string(),
            protocol,
            host,
            url,
            request_report: analyze_request(&fields),
            parsed_headers: explain_headers(&fields),
            request_id: headers.request_id().to_string(),
        }
    }
}

/// Body of an analyzed response: handler payload plus exchange details.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeBody<'a> {
    #[serde(flatten)]
    payload: &'a Map<String, Value>,
    methods: &'a str,
    protocol: &'a str,
    host: Option<&'a str>,
    status: u16,
    url: &'a str,
    request_report: &'a CategoryReport,
    response_report: &'a CategoryReport,
    headers: &'a [ParsedHeader],
}

pub async fn header_analysis_middleware(
    State(state): State<AnalysisState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let analysis = Arc::new(RequestAnalysis::from_request(&req));
    req.extensions_mut().insert(analysis.clone());

    let response = next.run(req).await;

    let response = finalize(&state, &analysis, response);
    metrics::record_request(&analysis.methods, response.status().as_u16(), start_time);
    response
}

/// Runs once per exchange, after every inner layer has set its headers.
fn finalize(state: &AnalysisState, analysis: &RequestAnalysis, response: Response) -> Response {
    let response_report = analyze_response(&HeaderFields::from_header_map(response.headers()));

    for (category, entry) in response_report.findings() {
        metrics::record_finding(entry.name, entry.status.as_str());
        if state.log_findings {
            tracing::warn!(
                request_id = %analysis.request_id,
                category,
                header = entry.name,
                status = entry.status.as_str(),
                recommendation = entry.recommendation.as_deref().unwrap_or_default(),
                "Response header finding"
            );
        }
    }

    let (mut parts, body) = response.into_parts();

    let Some(PendingBody(payload)) = parts.extensions.remove::<PendingBody>() else {
        parts.extensions.insert(response_report);
        return Response::from_parts(parts, body);
    };

    let rendered = ExchangeBody {
        payload: &payload,
        methods: &analysis.methods,
        protocol: &analysis.protocol,
        host: analysis.host.as_deref(),
        status: parts.status.as_u16(),
        url: &analysis.url,
        request_report: &analysis.request_report,
        response_report: &response_report,
        headers: &analysis.parsed_headers,
    };

    match serde_json::to_vec(&rendered) {
        Ok(bytes) => Response::from_parts(parts, Body::from(bytes)),
        Err(e) => {
            tracing::error!(request_id = %analysis.request_id, error = %e, "Failed to render analyzed body");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render response").into_response()
        }
    }
}
