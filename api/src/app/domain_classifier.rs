//! Technical domain classifier
//!
//! Maps a developer's repositories to a weighted distribution over
//! technical domains via the configured keyword table. Pure and
//! synchronous; safe to call concurrently.

use std::collections::BTreeSet;

use crate::app::tables::DomainTable;
use crate::domain::entities::{DeveloperMetrics, DomainScores, RepositoryMetrics};

/// Stars that buy one unit of repository weight
const STARS_PER_WEIGHT_UNIT: f64 = 100.0;

/// Cap on a single repository's weight
const MAX_REPO_WEIGHT: f64 = 100.0;

pub struct DomainClassifier {
    table: DomainTable,
}

impl DomainClassifier {
    pub fn new(table: DomainTable) -> Self {
        Self { table }
    }

    /// Classify a developer's portfolio into domain shares.
    ///
    /// Each repository contributes its full popularity weight to every
    /// domain it matches (multi-domain repositories count fully toward
    /// each), then accumulated scores are divided by the total weight
    /// across all repositories. Zero total weight yields an empty map.
    ///
    /// `_contributions` is accepted per-repository, parallel to
    /// `repositories`, and is reserved for weighting domains by
    /// contribution volume; the current classification ignores it.
    pub fn classify(
        &self,
        repositories: &[RepositoryMetrics],
        _contributions: &[DeveloperMetrics],
    ) -> DomainScores {
        let mut scores = DomainScores::new();
        let mut total_weight = 0.0;

        for repo in repositories {
            let weight = repo_weight(repo);
            total_weight += weight;

            for domain in self.repo_domains(repo) {
                *scores.entry(domain).or_insert(0.0) += weight;
            }
        }

        if total_weight > 0.0 {
            for score in scores.values_mut() {
                *score /= total_weight;
            }
            scores
        } else {
            DomainScores::new()
        }
    }

    /// Domains a single repository belongs to, from its primary language
    /// and topic tags
    fn repo_domains(&self, repo: &RepositoryMetrics) -> BTreeSet<String> {
        let mut domains = BTreeSet::new();

        if let Some(language) = &repo.language {
            let language = language.to_lowercase();
            for entry in self.table.entries() {
                // Languages match by exact keyword equality
                if entry.keywords.iter().any(|k| *k == language) {
                    domains.insert(entry.domain.clone());
                }
            }
        }

        for topic in &repo.topics {
            let topic = topic.to_lowercase();
            for entry in self.table.entries() {
                // Topics match by keyword substring
                if entry.keywords.iter().any(|k| topic.contains(k.as_str())) {
                    domains.insert(entry.domain.clone());
                }
            }
        }

        domains
    }
}

/// Linear popularity weight, deliberately simpler than the logarithmic
/// score normalization: it only ranks repositories relative to each
/// other for domain attribution.
fn repo_weight(repo: &RepositoryMetrics) -> f64 {
    (repo.stars as f64 / STARS_PER_WEIGHT_UNIT).min(MAX_REPO_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tables::DomainTable;

    fn classifier() -> DomainClassifier {
        DomainClassifier::new(DomainTable::builtin())
    }

    fn repo(full_name: &str, stars: u64, language: Option<&str>, topics: &[&str]) -> RepositoryMetrics {
        RepositoryMetrics {
            full_name: full_name.to_string(),
            stars,
            forks: 0,
            watchers: 0,
            language: language.map(|l| l.to_string()),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn single_javascript_repo_is_pure_frontend() {
        let repos = vec![repo("a/web", 250, Some("javascript"), &[])];
        let scores = classifier().classify(&repos, &[]);

        assert_eq!(scores.len(), 1);
        // Weight cancels in the division when there is one repository
        assert!((scores["Frontend"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn language_matching_is_case_insensitive() {
        let repos = vec![repo("a/web", 100, Some("JavaScript"), &[])];
        let scores = classifier().classify(&repos, &[]);
        assert!((scores["Frontend"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn equal_weight_repos_split_evenly() {
        let repos = vec![
            repo("a/svc", 100, Some("python"), &[]),
            repo("a/infra", 100, None, &["docker"]),
        ];
        let scores = classifier().classify(&repos, &[]);

        assert_eq!(scores.len(), 2);
        assert!((scores["Backend"] - 0.5).abs() < 1e-9);
        assert!((scores["DevOps"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn topic_matches_by_substring() {
        // "docker-compose" contains the "docker" keyword
        let repos = vec![repo("a/infra", 100, None, &["docker-compose"])];
        let scores = classifier().classify(&repos, &[]);
        assert!((scores["DevOps"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn one_repo_can_feed_multiple_domains() {
        let repos = vec![repo("a/full", 100, Some("javascript"), &["django"])];
        let scores = classifier().classify(&repos, &[]);

        // Full weight to each matched domain - no per-repository split
        assert!((scores["Frontend"] - 1.0).abs() < 1e-9);
        assert!((scores["Backend"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_portfolio_yields_empty_map() {
        let scores = classifier().classify(&[], &[]);
        assert!(scores.is_empty());
    }

    #[test]
    fn zero_star_portfolio_yields_empty_map() {
        // All weights 0 -> total weight 0 -> no division, empty result
        let repos = vec![
            repo("a/one", 0, Some("python"), &[]),
            repo("a/two", 0, Some("javascript"), &[]),
        ];
        let scores = classifier().classify(&repos, &[]);
        assert!(scores.is_empty());
    }

    #[test]
    fn unmatched_repo_still_counts_toward_total_weight() {
        // The divisor is total portfolio weight, not matched weight
        let repos = vec![
            repo("a/svc", 100, Some("python"), &[]),
            repo("a/misc", 300, Some("cobol"), &[]),
        ];
        let scores = classifier().classify(&repos, &[]);

        assert_eq!(scores.len(), 1);
        assert!((scores["Backend"] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn repo_weight_is_capped() {
        let huge = repo("a/mega", 1_000_000, None, &[]);
        assert_eq!(repo_weight(&huge), MAX_REPO_WEIGHT);
    }
}
