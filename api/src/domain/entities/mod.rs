//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM models in the `entity` module.

pub mod developer;
pub mod metrics;

pub use developer::{DeveloperAnalysis, DeveloperProfile, DomainScores, NationPrediction, UNKNOWN_NATION};
pub use metrics::{DeveloperMetrics, ProjectMetrics, RepositoryMetrics};
