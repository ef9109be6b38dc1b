//! Header classification and advisory engine.
//!
//! # Data Flow
//! ```text
//! HeaderMap (request or response)
//!     → fields.rs (ordered name/value pairs, multi-values joined)
//!     → catalog.rs (per-header explanation, request side)
//!     → report.rs (category classification)
//!         → categories.rs (direction-specific tables)
//!         → rules.rs (advisory escalation, response side)
//!     → CategoryReport / Vec<ParsedHeader>
//! ```
//!
//! # Design Decisions
//! - All tables are static and never mutated; safe to share across tasks
//! - Pure functions only: no I/O, no clocks, no failure modes
//! - Request and response sides keep separate tables and rule sets

pub mod catalog;
pub mod categories;
pub mod fields;
pub mod report;
pub mod rules;

pub use catalog::{explain_header, explain_headers, ParsedHeader, NO_EXPLANATION};
pub use categories::{CategorySet, Direction, HeaderCategory, HEADER_CATEGORIES, REQUEST_CATEGORIES};
pub use fields::HeaderFields;
pub use report::{
    analyze_request, analyze_response, classify_by_category, CategoryReport, HeaderEntryReport,
    HeaderStatus,
};
pub use rules::AdvisoryRule;
