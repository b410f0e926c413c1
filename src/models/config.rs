//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_page_size() -> usize {
    crate::DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Connection settings for the admin backend.
pub struct ServerConfig {
    /// Base URL of the REST API, e.g. `https://backoffice.example.com/api`.
    pub api_base_url: String,
    /// Bearer token issued by the session provider; absent in anonymous
    /// setups. Lifecycle (refresh, expiry) is owned by that provider.
    pub api_token: Option<String>,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}
