//! Application layer
//!
//! The scoring/inference core and the services that orchestrate it.
//! The core modules (score_calculator, domain_classifier,
//! nation_predictor) are pure; services coordinate them with ports.

pub mod activity;
pub mod analyzer_service;
pub mod developer_service;
pub mod domain_classifier;
pub mod nation_predictor;
pub mod rank_config;
pub mod score_calculator;
pub mod tables;

pub use activity::{ActivityModel, ConstantActivity};
pub use analyzer_service::AnalyzerService;
pub use developer_service::DeveloperService;
pub use domain_classifier::DomainClassifier;
pub use nation_predictor::NationPredictor;
pub use tables::{DomainTable, RegionTable};
