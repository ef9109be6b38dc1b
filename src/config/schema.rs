//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Secure response headers added to every response.
    pub security: SecurityConfig,

    /// Header analysis settings.
    pub analysis: AnalysisConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://header-lab.db", "sqlite::memory:").
    pub url: String,

    /// Maximum pooled connections. Forced to 1 for in-memory databases.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://header-lab.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Secure response header values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add the secure header set to responses.
    pub enable_headers: bool,
    pub strict_transport_security: String,
    pub content_security_policy: String,
    pub cache_control: String,
    pub content_type_options: String,
    pub frame_options: String,
    pub referrer_policy: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            strict_transport_security: "max-age=31536000; includeSubDomains".to_string(),
            content_security_policy: "default-src 'self'; script-src 'none';".to_string(),
            cache_control: "no-store".to_string(),
            content_type_options: "nosniff".to_string(),
            frame_options: "DENY".to_string(),
            referrer_policy: "no-referrer".to_string(),
        }
    }
}

impl SecurityConfig {
    /// Header name/value pairs in the order they are applied.
    pub fn header_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("strict-transport-security", self.strict_transport_security.as_str()),
            ("content-security-policy", self.content_security_policy.as_str()),
            ("cache-control", self.cache_control.as_str()),
            ("x-content-type-options", self.content_type_options.as_str()),
            ("x-frame-options", self.frame_options.as_str()),
            ("referrer-policy", self.referrer_policy.as_str()),
        ]
    }
}

/// Header analysis configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Log `attention`/`alert` entries of each response report.
    pub log_findings: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { log_findings: true }
    }
}
