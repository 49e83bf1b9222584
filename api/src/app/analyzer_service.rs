//! Developer analyzer service
//!
//! Orchestrates raw-data fetching with the pure scoring, classification
//! and nation-inference functions to produce one immutable
//! `DeveloperAnalysis` per developer.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinSet;

use crate::app::activity::ActivityModel;
use crate::app::domain_classifier::DomainClassifier;
use crate::app::nation_predictor::NationPredictor;
use crate::app::score_calculator;
use crate::domain::entities::{
    DeveloperAnalysis, DeveloperMetrics, DeveloperProfile, RepositoryMetrics,
};
use crate::domain::ports::GitHubClient;
use crate::error::AppError;

/// Upper bound on concurrent upstream fetches per analysis
const FETCH_CONCURRENCY: usize = 8;

/// Service producing developer analyses
pub struct AnalyzerService<GC>
where
    GC: GitHubClient + 'static,
{
    github: Arc<GC>,
    classifier: DomainClassifier,
    predictor: NationPredictor,
    activity: Arc<dyn ActivityModel>,
}

impl<GC> AnalyzerService<GC>
where
    GC: GitHubClient + 'static,
{
    pub fn new(
        github: Arc<GC>,
        classifier: DomainClassifier,
        predictor: NationPredictor,
        activity: Arc<dyn ActivityModel>,
    ) -> Self {
        Self {
            github,
            classifier,
            predictor,
            activity,
        }
    }

    /// Analyze one developer end to end.
    ///
    /// Fan-out fetches (one per repository, one per social-network
    /// neighbor) run with bounded concurrency and a fail-fast policy:
    /// the first failed fetch aborts the whole analysis and its
    /// in-flight siblings. Partial repository sets are never scored.
    ///
    /// Zero repositories is not an error: talent_rank is exactly 0 and
    /// the domain map is empty. Nation inference still runs.
    pub async fn analyze(&self, username: &str) -> Result<DeveloperAnalysis, AppError> {
        tracing::info!(username = %username, "starting developer analysis");

        let profile = self.github.fetch_profile(username).await?;

        // One fetch per repository feeds both rank averaging and domain
        // classification.
        let github = self.github.clone();
        let owner = profile.username.clone();
        let per_repo: Vec<(RepositoryMetrics, DeveloperMetrics)> =
            fan_out(profile.repositories.clone(), move |full_name| {
                let github = github.clone();
                let owner = owner.clone();
                async move {
                    let metrics = github.fetch_repository_metrics(&full_name).await?;
                    let contributions =
                        github.fetch_contribution_metrics(&owner, &full_name).await?;
                    Ok::<_, AppError>((metrics, contributions))
                }
            })
            .await?;
        let (repositories, contributions): (Vec<_>, Vec<_>) = per_repo.into_iter().unzip();

        let network_locations = self.collect_network_locations(&profile).await?;

        let talent_rank = self.calculate_talent_rank(&repositories, &contributions);
        let prediction = self
            .predictor
            .predict(profile.location.as_deref(), &network_locations);
        let domains = self.classifier.classify(&repositories, &contributions);

        let analysis = DeveloperAnalysis {
            username: profile.username.clone(),
            talent_rank,
            nation: prediction.nation,
            nation_confidence: prediction.confidence,
            domains,
            profile,
            last_updated: Utc::now(),
        };

        tracing::info!(
            username = %analysis.username,
            talent_rank = analysis.talent_rank,
            nation = %analysis.nation,
            nation_confidence = analysis.nation_confidence,
            "developer analysis complete"
        );

        Ok(analysis)
    }

    /// Average per-repository scores and combine them. Defined as 0 for
    /// an empty portfolio.
    fn calculate_talent_rank(
        &self,
        repositories: &[RepositoryMetrics],
        contributions: &[DeveloperMetrics],
    ) -> f64 {
        if repositories.is_empty() {
            return 0.0;
        }

        let repo_count = repositories.len() as f64;
        let total_project: f64 = repositories
            .iter()
            .map(|r| score_calculator::project_importance(&r.popularity()))
            .sum();
        let total_contribution: f64 = contributions
            .iter()
            .map(score_calculator::developer_contribution)
            .sum();

        let activity_factor = self.activity.activity_factor(repositories);

        score_calculator::final_score(
            total_project / repo_count,
            total_contribution / repo_count,
            activity_factor,
        )
    }

    /// Fetch every follower's and followed identity's profile and keep
    /// their declared locations
    async fn collect_network_locations(
        &self,
        profile: &DeveloperProfile,
    ) -> Result<Vec<String>, AppError> {
        let mut neighbors = profile.followers.clone();
        neighbors.extend(profile.following.iter().cloned());

        let github = self.github.clone();
        let neighbor_profiles = fan_out(neighbors, move |login| {
            let github = github.clone();
            async move { Ok::<_, AppError>(github.fetch_profile(&login).await?) }
        })
        .await?;

        Ok(neighbor_profiles
            .into_iter()
            .filter_map(|p| p.location)
            .collect())
    }
}

/// Run one future per input with at most `FETCH_CONCURRENCY` in flight,
/// returning outputs in input order (aggregation downstream depends on
/// deterministic ordering). Fail-fast: the first error aborts all
/// in-flight siblings and is returned.
async fn fan_out<I, T, F, Fut>(inputs: Vec<I>, make: F) -> Result<Vec<T>, AppError>
where
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, AppError>> + Send + 'static,
{
    let mut results: Vec<Option<T>> = Vec::new();
    results.resize_with(inputs.len(), || None);

    let mut pending = inputs.into_iter().enumerate();
    let mut in_flight: JoinSet<(usize, Result<T, AppError>)> = JoinSet::new();

    loop {
        while in_flight.len() < FETCH_CONCURRENCY {
            match pending.next() {
                Some((index, input)) => {
                    let fut = make(input);
                    in_flight.spawn(async move { (index, fut.await) });
                }
                None => break,
            }
        }

        match in_flight.join_next().await {
            Some(Ok((index, Ok(value)))) => results[index] = Some(value),
            Some(Ok((_, Err(e)))) => {
                in_flight.abort_all();
                return Err(e);
            }
            Some(Err(e)) => {
                in_flight.abort_all();
                return Err(AppError::Internal(format!("fetch task failed: {e}")));
            }
            None => break,
        }
    }

    results
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| AppError::Internal("fan-out lost a result slot".to_string()))
}
