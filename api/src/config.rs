use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// GitHub personal access token. Empty means unauthenticated requests
    /// (60 req/hour upstream limit - fine for local development).
    pub github_token: String,
    pub github_api_url: String,
    /// How long a stored analysis stays fresh before a request recomputes it
    pub cache_ttl_secs: u64,
    /// Optional JSON file overriding the builtin domain keyword table
    pub domain_table_path: Option<String>,
    /// Optional JSON file overriding the builtin location-to-region table
    pub region_table_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            github_token: env::var("GITHUB_TOKEN").unwrap_or_default(),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            domain_table_path: env::var("DOMAIN_TABLE_PATH").ok(),
            region_table_path: env::var("REGION_TABLE_PATH").ok(),
        }
    }
}
