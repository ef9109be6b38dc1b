//! Secure response headers.
//!
//! # Responsibilities
//! - Turn `SecurityConfig` into header name/value pairs
//! - Add them to every response that does not already carry them
//!
//! # Design Decisions
//! - Layers sit inside the analysis middleware so the response report
//!   sees the headers they add
//! - Handlers may override a value; layers only fill in what is missing

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::SecurityConfig;

/// Parsed secure header set. Empty when headers are disabled.
#[derive(Debug, Clone, Default)]
pub struct SecureHeaders {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl SecureHeaders {
    /// Build the header set. Values that fail to parse are skipped with a
    /// warning; config validation reports them before startup.
    pub fn from_config(config: &SecurityConfig) -> Self {
        if !config.enable_headers {
            return Self::default();
        }

        let headers = config
            .header_pairs()
            .into_iter()
            .filter_map(|(name, value)| match HeaderValue::from_str(value) {
                Ok(v) => Some((HeaderName::from_static(name), v)),
                Err(_) => {
                    tracing::warn!(header = name, "Skipping invalid secure header value");
                    None
                }
            })
            .collect();

        Self { headers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(HeaderName, HeaderValue)> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Wrap every route of `router` with one set-if-missing layer per header.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.headers.iter().fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name.clone(), value.clone()))
        })
    }
}
