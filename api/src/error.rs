//! Unified error types for the TalentRank API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `GitHubError`: GitHub API client errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid metric {field}: {value}")]
    InvalidMetric { field: &'static str, value: i64 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::GitHub(e) => {
                tracing::error!("GitHub error: {}", e);
                match e {
                    GitHubError::UserNotFound(_) | GitHubError::RepoNotFound(_) => {
                        (StatusCode::NOT_FOUND, "GitHub resource not found", None)
                    }
                    GitHubError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "Rate limited", None)
                    }
                    GitHubError::Unavailable(_) | GitHubError::Request(_) => {
                        (StatusCode::BAD_GATEWAY, "GitHub unavailable", None)
                    }
                    GitHubError::Api { status, message } => {
                        let http_status = if *status == 404 {
                            StatusCode::NOT_FOUND
                        } else if *status == 403 || *status == 429 {
                            StatusCode::TOO_MANY_REQUESTS
                        } else {
                            StatusCode::BAD_GATEWAY
                        };
                        (http_status, "GitHub service error", Some(message.clone()))
                    }
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "GitHub service error",
                        None,
                    ),
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
