//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    DeveloperAnalysis, DeveloperMetrics, DeveloperProfile, DomainScores, RepositoryMetrics,
};

/// A bare profile: no repositories, no network
pub fn test_profile(username: &str) -> DeveloperProfile {
    DeveloperProfile {
        username: username.to_string(),
        name: Some(format!("Dev {username}")),
        location: None,
        blog: None,
        bio: Some("writes code".to_string()),
        repositories: Vec::new(),
        followers: Vec::new(),
        following: Vec::new(),
    }
}

/// A profile with a declared location
pub fn test_profile_located(username: &str, location: &str) -> DeveloperProfile {
    DeveloperProfile {
        location: Some(location.to_string()),
        ..test_profile(username)
    }
}

pub fn test_repo(
    full_name: &str,
    stars: u64,
    language: Option<&str>,
    topics: &[&str],
) -> RepositoryMetrics {
    RepositoryMetrics {
        full_name: full_name.to_string(),
        stars,
        forks: stars / 2,
        watchers: stars / 5,
        language: language.map(|l| l.to_string()),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn test_contributions(commits: u64) -> DeveloperMetrics {
    DeveloperMetrics {
        commits,
        resolved_issues: commits / 4,
        pull_requests: commits / 5,
        code_reviews: commits / 3,
    }
}

/// A stored analysis record with a given rank and nation
pub fn test_analysis(username: &str, talent_rank: f64, nation: &str) -> DeveloperAnalysis {
    DeveloperAnalysis {
        username: username.to_string(),
        talent_rank,
        nation: nation.to_string(),
        nation_confidence: 1.0,
        domains: DomainScores::new(),
        profile: test_profile(username),
        last_updated: Utc::now(),
    }
}

/// A stored analysis with specific domain shares
pub fn test_analysis_with_domains(
    username: &str,
    talent_rank: f64,
    nation: &str,
    domains: &[(&str, f64)],
) -> DeveloperAnalysis {
    let mut analysis = test_analysis(username, talent_rank, nation);
    analysis.domains = domains
        .iter()
        .map(|(d, w)| (d.to_string(), *w))
        .collect();
    analysis
}
