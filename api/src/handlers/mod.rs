//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod developers;
pub mod stats;

pub use developers::{get_developer, search_developers};
pub use stats::get_stats;
