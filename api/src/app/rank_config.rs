//! TalentRank configuration constants
//!
//! Weights and normalization baselines for the composite score. A
//! baseline is the raw value a "typical strong" developer or project
//! reaches; it maps near 100 after logarithmic normalization.

/// Weight of stars in project importance
pub const PROJECT_WEIGHT_STARS: f64 = 0.4;

/// Weight of forks in project importance
pub const PROJECT_WEIGHT_FORKS: f64 = 0.3;

/// Weight of watchers in project importance
pub const PROJECT_WEIGHT_WATCHERS: f64 = 0.3;

/// Weight of commits in developer contribution
pub const CONTRIB_WEIGHT_COMMITS: f64 = 0.3;

/// Weight of resolved issues in developer contribution
pub const CONTRIB_WEIGHT_ISSUES: f64 = 0.25;

/// Weight of pull requests in developer contribution
pub const CONTRIB_WEIGHT_PULLS: f64 = 0.25;

/// Weight of code reviews in developer contribution
pub const CONTRIB_WEIGHT_REVIEWS: f64 = 0.2;

/// Share of project importance in the final score
pub const FINAL_WEIGHT_PROJECT: f64 = 0.4;

/// Share of developer contribution in the final score
pub const FINAL_WEIGHT_CONTRIBUTION: f64 = 0.6;

/// Normalization baseline for repository stars
pub const BASELINE_STARS: u64 = 1000;

/// Normalization baseline for repository forks
pub const BASELINE_FORKS: u64 = 500;

/// Normalization baseline for repository watchers
pub const BASELINE_WATCHERS: u64 = 200;

/// Normalization baseline for commits per year
pub const BASELINE_COMMITS: u64 = 100;

/// Normalization baseline for resolved issues per year
pub const BASELINE_ISSUES: u64 = 50;

/// Normalization baseline for pull requests per year
pub const BASELINE_PULLS: u64 = 30;

/// Normalization baseline for code reviews per year
pub const BASELINE_REVIEWS: u64 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_weights_sum_to_one() {
        let sum = PROJECT_WEIGHT_STARS + PROJECT_WEIGHT_FORKS + PROJECT_WEIGHT_WATCHERS;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn contribution_weights_sum_to_one() {
        let sum = CONTRIB_WEIGHT_COMMITS
            + CONTRIB_WEIGHT_ISSUES
            + CONTRIB_WEIGHT_PULLS
            + CONTRIB_WEIGHT_REVIEWS;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn final_weights_sum_to_one() {
        let sum = FINAL_WEIGHT_PROJECT + FINAL_WEIGHT_CONTRIBUTION;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn baselines_are_positive() {
        assert!(BASELINE_STARS > 0);
        assert!(BASELINE_FORKS > 0);
        assert!(BASELINE_WATCHERS > 0);
        assert!(BASELINE_COMMITS > 0);
        assert!(BASELINE_ISSUES > 0);
        assert!(BASELINE_PULLS > 0);
        assert!(BASELINE_REVIEWS > 0);
    }
}
