//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod repositories;

pub use github::GitHubClient;
pub use repositories::{AnalysisQuery, AnalysisRepository, AnalysisStats};
