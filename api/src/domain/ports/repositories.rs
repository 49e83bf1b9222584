//! Repository port traits
//!
//! These traits define the interface for persisting analysis records.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::DeveloperAnalysis;
use crate::error::DomainError;

/// Filters for searching stored analyses. All filters are optional and
/// combine conjunctively; results sort by talent_rank descending.
#[derive(Debug, Clone, Default)]
pub struct AnalysisQuery {
    /// Only developers whose domain map contains this label
    pub domain: Option<String>,
    pub nation: Option<String>,
    pub min_rank: Option<f64>,
    pub limit: u64,
    pub offset: u64,
}

/// Aggregate statistics over all stored analyses
#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    pub total_developers: u64,
    pub nations: Vec<String>,
    pub domains: Vec<String>,
    pub avg_rank: f64,
}

/// Repository for DeveloperAnalysis records, keyed by username
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Insert or replace the record for this username (latest wins)
    async fn upsert(&self, analysis: &DeveloperAnalysis) -> Result<(), DomainError>;

    /// Find the stored record for a username
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DeveloperAnalysis>, DomainError>;

    /// Search stored records, talent_rank descending, paginated
    async fn search(&self, query: &AnalysisQuery) -> Result<Vec<DeveloperAnalysis>, DomainError>;

    /// Count records matching the query's filters (pagination ignored)
    async fn count(&self, query: &AnalysisQuery) -> Result<u64, DomainError>;

    /// Aggregate statistics over the whole store
    async fn stats(&self) -> Result<AnalysisStats, DomainError>;
}
