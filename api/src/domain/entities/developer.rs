//! Developer domain entities
//!
//! The profile as fetched from the code host, and the analysis record
//! the orchestrator produces from it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel region returned when no location signal maps anywhere
pub const UNKNOWN_NATION: &str = "Unknown";

/// Weighted distribution over technical domains. Keys are domain labels
/// from the configured keyword table; values are shares of the
/// developer's weighted repository portfolio in [0, 1].
///
/// A BTreeMap so repeated analyses of identical raw data serialize
/// identically.
pub type DomainScores = BTreeMap<String, f64>;

/// A developer's public profile, fetched fresh per analysis.
/// Never mutated - only replaced by the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    /// Unique identity on the code host
    pub username: String,
    pub name: Option<String>,
    /// Free-text, user-declared location (primary nation signal)
    pub location: Option<String>,
    pub blog: Option<String>,
    pub bio: Option<String>,
    /// "owner/name" identifiers of the developer's repositories
    pub repositories: Vec<String>,
    pub followers: Vec<String>,
    pub following: Vec<String>,
}

/// A nation inference with its confidence in [0, 1]. A directly mapped
/// declared location always carries confidence 1.0; a network-majority
/// inference carries its vote share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationPrediction {
    pub nation: String,
    pub confidence: f64,
}

impl NationPrediction {
    pub fn unknown() -> Self {
        Self {
            nation: UNKNOWN_NATION.to_string(),
            confidence: 0.0,
        }
    }
}

/// The complete analysis record for one developer. Immutable once
/// returned; the store overwrites the previous record per username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperAnalysis {
    pub username: String,
    /// Composite score in [0, 100] x activity_factor
    pub talent_rank: f64,
    pub nation: String,
    pub nation_confidence: f64,
    pub domains: DomainScores,
    pub profile: DeveloperProfile,
    pub last_updated: DateTime<Utc>,
}
