//! Mock implementations of port traits
//!
//! In-memory implementations that can be pre-loaded with data and
//! configured to fail on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{
    DeveloperAnalysis, DeveloperMetrics, DeveloperProfile, RepositoryMetrics,
};
use crate::domain::ports::{AnalysisQuery, AnalysisRepository, AnalysisStats, GitHubClient};
use crate::error::{DomainError, GitHubError};

// ============================================================================
// Mock GitHub client
// ============================================================================

/// Scripted GitHub client. Unknown users/repos return the not-found
/// errors a real upstream would; contribution metrics default to zero
/// so fixtures stay light.
#[derive(Default)]
pub struct MockGitHubClient {
    profiles: Arc<RwLock<HashMap<String, DeveloperProfile>>>,
    repos: Arc<RwLock<HashMap<String, RepositoryMetrics>>>,
    contributions: Arc<RwLock<HashMap<(String, String), DeveloperMetrics>>>,
    failing_repo: Arc<RwLock<Option<String>>>,
    profile_fetches: Arc<AtomicUsize>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: DeveloperProfile) -> Self {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.username.clone(), profile);
        self
    }

    pub fn with_repo(self, repo: RepositoryMetrics) -> Self {
        self.repos
            .write()
            .unwrap()
            .insert(repo.full_name.clone(), repo);
        self
    }

    pub fn with_contributions(
        self,
        username: &str,
        full_name: &str,
        metrics: DeveloperMetrics,
    ) -> Self {
        self.contributions
            .write()
            .unwrap()
            .insert((username.to_string(), full_name.to_string()), metrics);
        self
    }

    /// Make this repository's metric fetch fail with a transient error
    pub fn with_failing_repo(self, full_name: &str) -> Self {
        *self.failing_repo.write().unwrap() = Some(full_name.to_string());
        self
    }

    /// Number of fetch_profile calls seen so far (neighbors included)
    pub fn profile_fetch_count(&self) -> usize {
        self.profile_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<DeveloperProfile, GitHubError> {
        self.profile_fetches.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .read()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| GitHubError::UserNotFound(username.to_string()))
    }

    async fn fetch_repository_metrics(
        &self,
        full_name: &str,
    ) -> Result<RepositoryMetrics, GitHubError> {
        if self.failing_repo.read().unwrap().as_deref() == Some(full_name) {
            return Err(GitHubError::Unavailable("injected failure".to_string()));
        }
        self.repos
            .read()
            .unwrap()
            .get(full_name)
            .cloned()
            .ok_or_else(|| GitHubError::RepoNotFound(full_name.to_string()))
    }

    async fn fetch_contribution_metrics(
        &self,
        username: &str,
        full_name: &str,
    ) -> Result<DeveloperMetrics, GitHubError> {
        Ok(self
            .contributions
            .read()
            .unwrap()
            .get(&(username.to_string(), full_name.to_string()))
            .copied()
            .unwrap_or(DeveloperMetrics {
                commits: 0,
                resolved_issues: 0,
                pull_requests: 0,
                code_reviews: 0,
            }))
    }
}

// ============================================================================
// In-memory analysis repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAnalysisRepository {
    records: Arc<RwLock<HashMap<String, DeveloperAnalysis>>>,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analysis(self, analysis: DeveloperAnalysis) -> Self {
        self.records
            .write()
            .unwrap()
            .insert(analysis.username.clone(), analysis);
        self
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches(analysis: &DeveloperAnalysis, query: &AnalysisQuery) -> bool {
    if let Some(domain) = &query.domain {
        if !analysis.domains.contains_key(domain) {
            return false;
        }
    }
    if let Some(nation) = &query.nation {
        if analysis.nation != *nation {
            return false;
        }
    }
    if let Some(min_rank) = query.min_rank {
        if analysis.talent_rank < min_rank {
            return false;
        }
    }
    true
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn upsert(&self, analysis: &DeveloperAnalysis) -> Result<(), DomainError> {
        self.records
            .write()
            .unwrap()
            .insert(analysis.username.clone(), analysis.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DeveloperAnalysis>, DomainError> {
        Ok(self.records.read().unwrap().get(username).cloned())
    }

    async fn search(&self, query: &AnalysisQuery) -> Result<Vec<DeveloperAnalysis>, DomainError> {
        let mut results: Vec<DeveloperAnalysis> = self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|a| matches(a, query))
            .cloned()
            .collect();

        results.sort_by(|a, b| b.talent_rank.total_cmp(&a.talent_rank));

        Ok(results
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn count(&self, query: &AnalysisQuery) -> Result<u64, DomainError> {
        Ok(self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|a| matches(a, query))
            .count() as u64)
    }

    async fn stats(&self) -> Result<AnalysisStats, DomainError> {
        let records = self.records.read().unwrap();
        let total = records.len() as u64;

        let mut nations: Vec<String> = records.values().map(|a| a.nation.clone()).collect();
        nations.sort();
        nations.dedup();

        let mut domains: Vec<String> = records
            .values()
            .flat_map(|a| a.domains.keys().cloned())
            .collect();
        domains.sort();
        domains.dedup();

        let avg_rank = if total > 0 {
            records.values().map(|a| a.talent_rank).sum::<f64>() / total as f64
        } else {
            0.0
        };

        Ok(AnalysisStats {
            total_developers: total,
            nations,
            domains,
            avg_rank,
        })
    }
}
