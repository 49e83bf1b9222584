//! TalentRank API Server
//!
//! Estimates a composite talent score for developers from their public
//! GitHub activity: repository popularity, contribution counts, inferred
//! region and inferred technical domains.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{GitHubClientImpl, PostgresAnalysisRepository};
use app::{
    AnalyzerService, ConstantActivity, DeveloperService, DomainClassifier, DomainTable,
    NationPredictor, RegionTable,
};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub developer_service: Arc<DeveloperService<PostgresAnalysisRepository, GitHubClientImpl>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builtin domain table, or the JSON override if configured
fn load_domain_table(config: &Config) -> anyhow::Result<DomainTable> {
    match &config.domain_table_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(DomainTable::from_json(&json)?)
        }
        None => Ok(DomainTable::builtin()),
    }
}

/// Builtin region table, or the JSON override if configured
fn load_region_table(config: &Config) -> anyhow::Result<RegionTable> {
    match &config.region_table_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(RegionTable::from_json(&json)?)
        }
        None => Ok(RegionTable::builtin()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,talentrank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TalentRank API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    // Create adapters
    let analysis_repo = Arc::new(PostgresAnalysisRepository::new(db.clone()));
    let github_client = Arc::new(GitHubClientImpl::new(
        config.github_api_url.clone(),
        config.github_token.clone(),
    ));

    // Create application services
    let analyzer = Arc::new(AnalyzerService::new(
        github_client.clone(),
        DomainClassifier::new(load_domain_table(&config)?),
        NationPredictor::new(load_region_table(&config)?),
        Arc::new(ConstantActivity),
    ));

    let developer_service = Arc::new(DeveloperService::new(
        analysis_repo.clone(),
        analyzer,
        config.cache_ttl_secs,
    ));

    // Create app state
    let state = AppState { developer_service };

    // Rate limiting for the analyze endpoint: one analysis fans out many
    // upstream calls, so 2 req/sec sustained with a burst of 5.
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("failed to build governor config"))?,
    );

    // Rate-limited routes (analysis triggers upstream fan-out)
    let rate_limited_routes = Router::new()
        .route("/api/v1/developers/:username", get(handlers::get_developer))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Read-only queries over stored analyses
        .route("/api/v1/search", get(handlers::search_developers))
        .route("/api/v1/stats", get(handlers::get_stats))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
