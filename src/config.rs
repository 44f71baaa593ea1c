use std::time::Duration;

/// Default base URL for the REST API.
pub const DEFAULT_API_URL: &str = "https://api.instagram.com/v1";

/// Configuration for the Instagram client.
#[derive(Debug, Clone)]
pub struct InstagramConfig {
    /// Base URL for the REST API (e.g. `https://api.instagram.com/v1`).
    pub api_url: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}
