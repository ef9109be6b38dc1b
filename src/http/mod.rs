//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID)
//!     → middleware/header_analysis.rs (request report)
//!     → handlers/ (CRUD against storage)
//!     → security headers (fill in response headers)
//!     → middleware/header_analysis.rs (response report, body rendering)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use response::{Analyzed, ApiError};
pub use server::{AppState, HttpServer};
