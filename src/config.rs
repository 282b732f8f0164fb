use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("listing-scout/", env!("CARGO_PKG_VERSION"));

/// Settings for talking to the listing service
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Base URL of the marketplace API; `/properties` is appended
    pub api_url: String,
    /// Bearer token passed through to the API, if any
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
