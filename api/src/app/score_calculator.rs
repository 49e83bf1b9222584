//! TalentRank score calculator
//!
//! Pure functions turning raw activity counts into bounded scores.
//! Total over all inputs (counts are `u64`), side-effect free, safe to
//! call concurrently.

use crate::app::rank_config::{
    BASELINE_COMMITS, BASELINE_FORKS, BASELINE_ISSUES, BASELINE_PULLS, BASELINE_REVIEWS,
    BASELINE_STARS, BASELINE_WATCHERS, CONTRIB_WEIGHT_COMMITS, CONTRIB_WEIGHT_ISSUES,
    CONTRIB_WEIGHT_PULLS, CONTRIB_WEIGHT_REVIEWS, FINAL_WEIGHT_CONTRIBUTION,
    FINAL_WEIGHT_PROJECT, PROJECT_WEIGHT_FORKS, PROJECT_WEIGHT_STARS, PROJECT_WEIGHT_WATCHERS,
};
use crate::domain::entities::{DeveloperMetrics, ProjectMetrics};

/// Compress an unbounded count into [0, 100], scaled so `baseline` maps
/// near 100. Strictly increasing and sub-linear: a developer with
/// 10,000 commits should not score 100x one with 100.
pub fn normalize(value: u64, baseline: u64) -> f64 {
    if value == 0 {
        return 0.0;
    }
    let scaled = (value as f64 + 1.0).ln() / (baseline as f64 + 1.0).ln() * 100.0;
    scaled.min(100.0)
}

/// Project importance in [0, 100] from a repository's popularity
pub fn project_importance(metrics: &ProjectMetrics) -> f64 {
    let score = normalize(metrics.stars, BASELINE_STARS) * PROJECT_WEIGHT_STARS
        + normalize(metrics.forks, BASELINE_FORKS) * PROJECT_WEIGHT_FORKS
        + normalize(metrics.watchers, BASELINE_WATCHERS) * PROJECT_WEIGHT_WATCHERS;

    score.min(100.0)
}

/// Developer contribution in [0, 100] from one repository's activity counts
pub fn developer_contribution(metrics: &DeveloperMetrics) -> f64 {
    let score = normalize(metrics.commits, BASELINE_COMMITS) * CONTRIB_WEIGHT_COMMITS
        + normalize(metrics.resolved_issues, BASELINE_ISSUES) * CONTRIB_WEIGHT_ISSUES
        + normalize(metrics.pull_requests, BASELINE_PULLS) * CONTRIB_WEIGHT_PULLS
        + normalize(metrics.code_reviews, BASELINE_REVIEWS) * CONTRIB_WEIGHT_REVIEWS;

    score.min(100.0)
}

/// Combine the two averaged sub-scores into the final TalentRank.
///
/// Not clamped after the multiply: callers must clamp if they supply an
/// activity factor above 1.
pub fn final_score(project_score: f64, contribution_score: f64, activity_factor: f64) -> f64 {
    (project_score * FINAL_WEIGHT_PROJECT + contribution_score * FINAL_WEIGHT_CONTRIBUTION)
        * activity_factor
}
