//! Developer service
//!
//! Wraps the analyzer with the cache-or-recompute policy and exposes
//! search and statistics over stored analyses. The analyzer itself
//! stays pure orchestration; TTL and persistence decisions live here.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::app::analyzer_service::AnalyzerService;
use crate::domain::entities::DeveloperAnalysis;
use crate::domain::ports::{AnalysisQuery, AnalysisRepository, AnalysisStats, GitHubClient};
use crate::error::AppError;

pub struct DeveloperService<AR, GC>
where
    AR: AnalysisRepository,
    GC: GitHubClient + 'static,
{
    analyses: Arc<AR>,
    analyzer: Arc<AnalyzerService<GC>>,
    cache_ttl: Duration,
}

impl<AR, GC> DeveloperService<AR, GC>
where
    AR: AnalysisRepository,
    GC: GitHubClient + 'static,
{
    pub fn new(analyses: Arc<AR>, analyzer: Arc<AnalyzerService<GC>>, cache_ttl_secs: u64) -> Self {
        Self {
            analyses,
            analyzer,
            cache_ttl: Duration::seconds(cache_ttl_secs as i64),
        }
    }

    /// Serve the stored analysis if it is younger than the TTL, else
    /// recompute and overwrite it (latest wins). `force_refresh`
    /// bypasses the freshness check.
    pub async fn get_or_analyze(
        &self,
        username: &str,
        force_refresh: bool,
    ) -> Result<DeveloperAnalysis, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::BadRequest(
                "username must not be empty".to_string(),
            ));
        }

        if !force_refresh {
            if let Some(cached) = self.analyses.find_by_username(username).await? {
                if Utc::now() - cached.last_updated < self.cache_ttl {
                    tracing::info!(username = %username, "serving cached analysis");
                    return Ok(cached);
                }
            }
        }

        let analysis = self.analyzer.analyze(username).await?;
        self.analyses.upsert(&analysis).await?;

        Ok(analysis)
    }

    /// Search stored analyses; returns the total match count alongside
    /// the requested page
    pub async fn search(
        &self,
        query: &AnalysisQuery,
    ) -> Result<(u64, Vec<DeveloperAnalysis>), AppError> {
        let total = self.analyses.count(query).await?;
        let developers = self.analyses.search(query).await?;

        tracing::info!(
            total = total,
            page_len = developers.len(),
            "developer search complete"
        );

        Ok((total, developers))
    }

    /// Aggregate statistics over all stored analyses
    pub async fn stats(&self) -> Result<AnalysisStats, AppError> {
        Ok(self.analyses.stats().await?)
    }
}
