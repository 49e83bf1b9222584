//! Raw activity metrics fetched from the upstream code host
//!
//! All counts are `u64`: negative values are rejected at the fetch
//! boundary, so the scoring core never sees them.

use serde::{Deserialize, Serialize};

/// Popularity metrics for a single repository at observation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
}

/// One developer's activity in one repository over a trailing 365-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperMetrics {
    pub commits: u64,
    pub resolved_issues: u64,
    pub pull_requests: u64,
    pub code_reviews: u64,
}

/// Full observed state of a repository: popularity plus the tags used
/// for domain classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetrics {
    /// "owner/name" identifier on the code host
    pub full_name: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    /// Primary language as reported upstream
    pub language: Option<String>,
    pub topics: Vec<String>,
}

impl RepositoryMetrics {
    /// The popularity subset consumed by the score calculator
    pub fn popularity(&self) -> ProjectMetrics {
        ProjectMetrics {
            stars: self.stars,
            forks: self.forks,
            watchers: self.watchers,
        }
    }
}
