//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → todos.rs / list.rs (single parameterized statement per call)
//!     → SqlitePool (pool.rs)
//! ```
//!
//! # Design Decisions
//! - No transactions: each operation is one statement
//! - Tables are created on startup if missing
//! - Missing rows are reported as `None`/`false`, not as errors

pub mod list;
pub mod pool;
pub mod todos;

use thiserror::Error;

pub use list::ListEntry;
pub use pool::init_pool;
pub use todos::{Todo, TodoInput};

/// Errors raised by the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let config = crate::config::DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    init_pool(&config).await.unwrap()
}
