//! GitHub REST API client implementation

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use urlencoding::encode;

use crate::domain::entities::{DeveloperMetrics, DeveloperProfile, RepositoryMetrics};
use crate::domain::ports::GitHubClient;
use crate::error::GitHubError;

/// Contribution metrics cover this trailing window
const CONTRIBUTION_WINDOW_DAYS: i64 = 365;

/// Page size for list endpoints
const PER_PAGE: u32 = 100;

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClientImpl {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// "owner/name" -> "/repos/owner/name" with both segments encoded
    fn repo_path(&self, full_name: &str) -> String {
        match full_name.split_once('/') {
            Some((owner, repo)) => format!("/repos/{}/{}", encode(owner), encode(repo)),
            None => format!("/repos/{}", encode(full_name)),
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(self.api_url(path))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "talentrank-api");
        if !self.token.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.token));
        }
        request
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else if status.as_u16() == 403 || status.as_u16() == 429 {
            // GitHub signals both primary and secondary rate limits as 403
            Err(GitHubError::RateLimited)
        } else if status.is_server_error() {
            Err(GitHubError::Unavailable(status.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Issue one Search API query and return its total_count
    async fn search_count(&self, endpoint: &str, query: String) -> Result<u64, GitHubError> {
        let resp = self
            .get(endpoint)
            .query(&[("q", query.as_str()), ("per_page", "1")])
            .send()
            .await?;

        let result: SearchCountResponse = self.handle_response(resp).await?;
        require_count("total_count", result.total_count)
    }
}

/// Response types for the GitHub API
#[derive(Deserialize)]
struct UserResponse {
    login: String,
    name: Option<String>,
    location: Option<String>,
    blog: Option<String>,
    bio: Option<String>,
}

#[derive(Deserialize)]
struct UserSummaryResponse {
    login: String,
}

#[derive(Deserialize)]
struct RepoSummaryResponse {
    full_name: String,
}

#[derive(Deserialize)]
struct RepoResponse {
    full_name: String,
    stargazers_count: i64,
    forks_count: i64,
    /// The real watcher count. `watchers_count` mirrors stars on this API.
    subscribers_count: i64,
    language: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
}

#[derive(Deserialize)]
struct SearchCountResponse {
    total_count: i64,
}

/// Validate a raw upstream count before it enters the unsigned domain types
fn require_count(field: &'static str, value: i64) -> Result<u64, GitHubError> {
    u64::try_from(value).map_err(|_| GitHubError::InvalidMetric { field, value })
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn fetch_profile(&self, username: &str) -> Result<DeveloperProfile, GitHubError> {
        let resp = self
            .get(&format!("/users/{}", encode(username)))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(GitHubError::UserNotFound(username.to_string()));
        }

        let user: UserResponse = self.handle_response(resp).await?;

        // TODO: follow Link headers past the first page for accounts
        // with more than 100 repos/followers/following
        let resp = self
            .get(&format!("/users/{}/repos", encode(username)))
            .query(&[("per_page", PER_PAGE)])
            .query(&[("type", "owner")])
            .send()
            .await?;
        let repos: Vec<RepoSummaryResponse> = self.handle_response(resp).await?;

        let resp = self
            .get(&format!("/users/{}/followers", encode(username)))
            .query(&[("per_page", PER_PAGE)])
            .send()
            .await?;
        let followers: Vec<UserSummaryResponse> = self.handle_response(resp).await?;

        let resp = self
            .get(&format!("/users/{}/following", encode(username)))
            .query(&[("per_page", PER_PAGE)])
            .send()
            .await?;
        let following: Vec<UserSummaryResponse> = self.handle_response(resp).await?;

        Ok(DeveloperProfile {
            username: user.login,
            name: user.name,
            location: user.location,
            blog: user.blog,
            bio: user.bio,
            repositories: repos.into_iter().map(|r| r.full_name).collect(),
            followers: followers.into_iter().map(|u| u.login).collect(),
            following: following.into_iter().map(|u| u.login).collect(),
        })
    }

    async fn fetch_repository_metrics(
        &self,
        full_name: &str,
    ) -> Result<RepositoryMetrics, GitHubError> {
        let resp = self.get(&self.repo_path(full_name)).send().await?;

        if resp.status().as_u16() == 404 {
            return Err(GitHubError::RepoNotFound(full_name.to_string()));
        }

        let repo: RepoResponse = self.handle_response(resp).await?;

        Ok(RepositoryMetrics {
            full_name: repo.full_name,
            stars: require_count("stargazers_count", repo.stargazers_count)?,
            forks: require_count("forks_count", repo.forks_count)?,
            watchers: require_count("subscribers_count", repo.subscribers_count)?,
            language: repo.language,
            topics: repo.topics,
        })
    }

    async fn fetch_contribution_metrics(
        &self,
        username: &str,
        full_name: &str,
    ) -> Result<DeveloperMetrics, GitHubError> {
        let since = (Utc::now() - Duration::days(CONTRIBUTION_WINDOW_DAYS))
            .format("%Y-%m-%d")
            .to_string();

        let commits = self
            .search_count(
                "/search/commits",
                format!("repo:{full_name} author:{username} committer-date:>={since}"),
            )
            .await?;

        let resolved_issues = self
            .search_count(
                "/search/issues",
                format!("repo:{full_name} author:{username} type:issue state:closed closed:>={since}"),
            )
            .await?;

        let pull_requests = self
            .search_count(
                "/search/issues",
                format!("repo:{full_name} author:{username} type:pr created:>={since}"),
            )
            .await?;

        let code_reviews = self
            .search_count(
                "/search/issues",
                format!("repo:{full_name} reviewed-by:{username} type:pr updated:>={since}"),
            )
            .await?;

        Ok(DeveloperMetrics {
            commits,
            resolved_issues,
            pull_requests,
            code_reviews,
        })
    }
}
