//! Todo/list API with HTTP header analysis.

pub mod analysis;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod storage;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
