//! Keyword lookup tables for domain classification and nation inference
//!
//! Both tables are ordered lists, not maps: entry order is the tie-break
//! contract for overlapping keywords (first matching entry wins), so it
//! must survive construction, JSON round-trips, and iteration. Keywords
//! are lowercased at construction; matching is against lowercased input.
//!
//! The builtin data ships in source; operators can override either table
//! with a JSON file (same list-of-entries shape) via configuration.

use serde::Deserialize;

/// One technical domain and the keywords that attribute repositories to it
#[derive(Debug, Clone, Deserialize)]
pub struct DomainEntry {
    pub domain: String,
    pub keywords: Vec<String>,
}

/// Ordered domain -> keywords table
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct DomainTable {
    entries: Vec<DomainEntry>,
}

impl DomainTable {
    pub fn new(mut entries: Vec<DomainEntry>) -> Self {
        for entry in &mut entries {
            for keyword in &mut entry.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Self { entries }
    }

    /// Parse from a JSON list of `{"domain": ..., "keywords": [...]}` entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: DomainTable = serde_json::from_str(json)?;
        Ok(Self::new(table.entries))
    }

    pub fn entries(&self) -> &[DomainEntry] {
        &self.entries
    }

    /// The seven builtin domains
    pub fn builtin() -> Self {
        let entry = |domain: &str, keywords: &[&str]| DomainEntry {
            domain: domain.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self::new(vec![
            entry(
                "Frontend",
                &["javascript", "typescript", "react", "vue", "angular", "web"],
            ),
            entry(
                "Backend",
                &["python", "java", "golang", "nodejs", "django", "spring"],
            ),
            entry(
                "Mobile",
                &["android", "ios", "flutter", "react-native", "mobile"],
            ),
            entry("DevOps", &["docker", "kubernetes", "aws", "cicd", "jenkins"]),
            entry(
                "AI/ML",
                &["machine-learning", "deep-learning", "tensorflow", "pytorch"],
            ),
            entry(
                "Security",
                &["security", "cryptography", "encryption", "penetration"],
            ),
            entry(
                "Database",
                &["mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
            ),
        ])
    }
}

/// One canonical region and the location keywords that map to it
#[derive(Debug, Clone, Deserialize)]
pub struct RegionEntry {
    pub region: String,
    pub keywords: Vec<String>,
}

/// Ordered location-keyword -> region table. First matching region in
/// table order wins; overlapping keywords across regions resolve by this
/// ordering, not by longest match.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
}

impl RegionTable {
    pub fn new(mut entries: Vec<RegionEntry>) -> Self {
        for entry in &mut entries {
            for keyword in &mut entry.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Self { entries }
    }

    /// Parse from a JSON list of `{"region": ..., "keywords": [...]}` entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: RegionTable = serde_json::from_str(json)?;
        Ok(Self::new(table.entries))
    }

    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    /// Builtin regions. The first four entries and their relative order
    /// are load-bearing: later additions must be appended, never
    /// inserted, or existing matches change.
    pub fn builtin() -> Self {
        let entry = |region: &str, keywords: &[&str]| RegionEntry {
            region: region.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self::new(vec![
            entry(
                "China",
                &["china", "cn", "beijing", "shanghai", "guangzhou", "shenzhen"],
            ),
            entry(
                "United States",
                &["usa", "us", "united states", "california", "new york"],
            ),
            entry("India", &["india", "bangalore", "mumbai", "delhi"]),
            entry(
                "United Kingdom",
                &["uk", "united kingdom", "london", "manchester"],
            ),
            entry("Germany", &["germany", "berlin", "munich", "hamburg"]),
            entry("Japan", &["japan", "tokyo", "osaka"]),
            entry("Canada", &["canada", "toronto", "vancouver", "montreal"]),
            entry("Brazil", &["brazil", "sao paulo", "rio de janeiro"]),
        ])
    }
}
