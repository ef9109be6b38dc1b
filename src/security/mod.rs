//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Handler response:
//!     → headers.rs (fill in HSTS, CSP, cache and framing headers)
//!     → header analysis middleware (reports on the final set)
//! ```

pub mod headers;

pub use headers::SecureHeaders;
