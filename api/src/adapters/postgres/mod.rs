//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod analysis_repo;

pub use analysis_repo::PostgresAnalysisRepository;
