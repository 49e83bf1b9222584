//! Developer handlers
//!
//! Endpoints for analyzing a single developer and searching stored
//! analyses.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeveloperAnalysis, DeveloperProfile, DomainScores};
use crate::domain::ports::AnalysisQuery;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for GET /api/v1/developers/:username
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    /// Skip the cache and recompute even if a fresh record exists
    #[serde(default)]
    pub force_refresh: bool,
}

/// One developer analysis as served over HTTP
#[derive(Debug, Serialize)]
pub struct DeveloperResponse {
    pub username: String,
    pub talent_rank: f64,
    pub nation: String,
    pub nation_confidence: f64,
    pub domains: DomainScores,
    pub profile: DeveloperProfile,
    pub last_updated: DateTime<Utc>,
}

impl From<DeveloperAnalysis> for DeveloperResponse {
    fn from(analysis: DeveloperAnalysis) -> Self {
        Self {
            username: analysis.username,
            talent_rank: analysis.talent_rank,
            nation: analysis.nation,
            nation_confidence: analysis.nation_confidence,
            domains: analysis.domains,
            profile: analysis.profile,
            last_updated: analysis.last_updated,
        }
    }
}

/// GET /api/v1/developers/:username
///
/// Serve the stored analysis when younger than the cache TTL, otherwise
/// analyze the developer now and store the result.
pub async fn get_developer(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<DeveloperResponse>, AppError> {
    let analysis = state
        .developer_service
        .get_or_analyze(&username, params.force_refresh)
        .await?;

    Ok(Json(analysis.into()))
}

/// Query parameters for GET /api/v1/search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub domain: Option<String>,
    pub nation: Option<String>,
    pub min_rank: Option<f64>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    20
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: u64,
    pub developers: Vec<DeveloperResponse>,
}

/// GET /api/v1/search
///
/// Search stored analyses by domain, nation and minimum rank, sorted by
/// talent_rank descending.
pub async fn search_developers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    if params.limit == 0 || params.limit > 100 {
        return Err(AppError::BadRequest(
            "limit must be between 1 and 100".to_string(),
        ));
    }
    if let Some(min_rank) = params.min_rank {
        if !(0.0..=100.0).contains(&min_rank) {
            return Err(AppError::BadRequest(
                "min_rank must be between 0 and 100".to_string(),
            ));
        }
    }

    let query = AnalysisQuery {
        domain: params.domain,
        nation: params.nation,
        min_rank: params.min_rank,
        limit: params.limit,
        offset: params.offset,
    };

    let (total, developers) = state.developer_service.search(&query).await?;

    Ok(Json(SearchResponse {
        total,
        developers: developers.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_params_default_to_no_refresh() {
        let params: AnalyzeParams = serde_json::from_str("{}").unwrap();
        assert!(!params.force_refresh);

        let params: AnalyzeParams = serde_json::from_str(r#"{"force_refresh": true}"#).unwrap();
        assert!(params.force_refresh);
    }

    #[test]
    fn search_params_defaults() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, 20);
        assert_eq!(params.offset, 0);
        assert!(params.domain.is_none());
        assert!(params.nation.is_none());
        assert!(params.min_rank.is_none());
    }

    #[test]
    fn search_params_parse_all_filters() {
        let json = r#"{
            "domain": "Backend",
            "nation": "China",
            "min_rank": 50.0,
            "limit": 10,
            "offset": 30
        }"#;
        let params: SearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.domain.as_deref(), Some("Backend"));
        assert_eq!(params.nation.as_deref(), Some("China"));
        assert_eq!(params.min_rank, Some(50.0));
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 30);
    }
}
