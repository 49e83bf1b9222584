//! GitHub client port trait
//!
//! Defines the interface for fetching raw developer facts from GitHub.
//! The scoring core consumes this; it supplies no algorithmic behavior
//! of its own.

use async_trait::async_trait;

use crate::domain::entities::{DeveloperMetrics, DeveloperProfile, RepositoryMetrics};
use crate::error::GitHubError;

#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a developer's profile: identity, declared location, and the
    /// identifier lists the analyzer fans out over.
    ///
    /// Fails with `UserNotFound` if the identity does not exist, and with
    /// `RateLimited`/`Unavailable` on transient upstream failure.
    async fn fetch_profile(&self, username: &str) -> Result<DeveloperProfile, GitHubError>;

    /// Fetch popularity metrics and classification tags for one
    /// repository ("owner/name").
    async fn fetch_repository_metrics(
        &self,
        full_name: &str,
    ) -> Result<RepositoryMetrics, GitHubError>;

    /// Fetch one developer's contribution counts in one repository over
    /// a trailing 365-day window.
    async fn fetch_contribution_metrics(
        &self,
        username: &str,
        full_name: &str,
    ) -> Result<DeveloperMetrics, GitHubError>;
}
