//! Nation predictor
//!
//! Infers a developer's probable nation/region from their declared
//! location, falling back to the modal region among their social
//! network's locations. Pure and synchronous.

use std::collections::HashMap;

use crate::app::tables::RegionTable;
use crate::domain::entities::NationPrediction;

pub struct NationPredictor {
    table: RegionTable,
}

impl NationPredictor {
    pub fn new(table: RegionTable) -> Self {
        Self { table }
    }

    /// Predict a nation and a confidence in [0, 1].
    ///
    /// A declared location that maps to a region wins outright with
    /// confidence 1.0. Otherwise the most frequent region among the
    /// mapped network locations is returned with confidence = its vote
    /// share of the *mapped* locations (unmapped strings drop out of
    /// the denominator; a unanimous network also reaches 1.0). If
    /// nothing maps, the Unknown sentinel is returned with confidence 0.0.
    pub fn predict(&self, declared_location: Option<&str>, network_locations: &[String]) -> NationPrediction {
        if let Some(declared) = declared_location {
            if let Some(nation) = self.map_location(declared) {
                return NationPrediction {
                    nation,
                    confidence: 1.0,
                };
            }
        }

        self.predict_from_network(network_locations)
    }

    fn predict_from_network(&self, network_locations: &[String]) -> NationPrediction {
        let mapped: Vec<String> = network_locations
            .iter()
            .filter_map(|loc| self.map_location(loc))
            .collect();

        if mapped.is_empty() {
            return NationPrediction::unknown();
        }

        // Count votes, remembering first-encounter order so ties break
        // deterministically for a given input order.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for nation in &mapped {
            let count = counts.entry(nation.as_str()).or_insert(0);
            if *count == 0 {
                order.push(nation.as_str());
            }
            *count += 1;
        }

        let mut best = order[0];
        for nation in &order[1..] {
            if counts[nation] > counts[best] {
                best = nation;
            }
        }

        NationPrediction {
            nation: best.to_string(),
            confidence: counts[best] as f64 / mapped.len() as f64,
        }
    }

    /// Map a free-text location to a canonical region. First region in
    /// table order with any keyword appearing as a substring wins.
    fn map_location(&self, location: &str) -> Option<String> {
        let location = location.to_lowercase();
        let location = location.trim();
        if location.is_empty() {
            return None;
        }

        for entry in self.table.entries() {
            if entry.keywords.iter().any(|k| location.contains(k.as_str())) {
                return Some(entry.region.clone());
            }
        }

        None
    }
}
