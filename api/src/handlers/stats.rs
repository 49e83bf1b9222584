//! Statistics handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_developers: u64,
    pub nations: Vec<String>,
    pub domains: Vec<String>,
    pub avg_rank: f64,
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.developer_service.stats().await?;

    Ok(Json(StatsResponse {
        total_developers: stats.total_developers,
        nations: stats.nations,
        domains: stats.domains,
        avg_rank: stats.avg_rank,
    }))
}
