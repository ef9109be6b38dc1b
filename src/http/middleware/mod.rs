//! Request/response middleware.

pub mod header_analysis;

pub use header_analysis::{header_analysis_middleware, AnalysisState, RequestAnalysis};
