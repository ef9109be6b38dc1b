//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, secure headers,
//!   header analysis)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers::{self, list, todos};
use crate::http::middleware::{header_analysis_middleware, AnalysisState};
use crate::http::request::{x_request_id, RequestIdExt, UuidRequestId};
use crate::security::SecureHeaders;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// HTTP server for the todo/list API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and database pool.
    pub fn new(config: AppConfig, pool: SqlitePool) -> Self {
        let state = AppState { pool };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layer order, outermost first: request ID, trace, request ID
    /// propagation, timeout, header analysis, secure headers, handlers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(list::index))
            .route("/todos", get(todos::list_todos).post(todos::create_todo))
            .route("/todos/{id}", put(todos::update_todo).delete(todos::delete_todo))
            .route("/list", get(list::list_entries).post(list::add_entry))
            .route("/list/{id}/delete", post(list::delete_entry))
            .route("/headers", get(handlers::show_headers))
            .route("/status", get(handlers::get_status));

        let secure_headers = SecureHeaders::from_config(&config.security);
        let analysis_state = AnalysisState {
            log_findings: config.analysis.log_findings,
        };

        secure_headers
            .apply(routes)
            .layer(middleware::from_fn_with_state(analysis_state, header_analysis_middleware))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(x_request_id()))
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    uri = %req.uri(),
                    request_id = %req.headers().request_id(),
                )
            }))
            .layer(SetRequestIdLayer::new(x_request_id(), UuidRequestId))
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            secure_headers = self.config.security.enable_headers,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
