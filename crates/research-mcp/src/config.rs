//! Configuration for the research MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const BASE_URL: &str = "https://api.openalex.org";

    /// Request timeout applied to every upstream call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("research-mcp/", env!("CARGO_PKG_VERSION"));
}

/// Per-tool result ceilings.
///
/// The client itself enforces none of these; every tool clamps or validates
/// its own counts against the values here.
pub mod limits {
    /// Default number of papers returned by `search_papers`.
    pub const DEFAULT_SEARCH_RESULTS: u32 = 5;

    /// Upper bound for any single-page list request.
    pub const MAX_PAGE_RESULTS: u32 = 50;

    /// Default number of papers per direction in a citation network.
    pub const DEFAULT_NETWORK_RESULTS: u32 = 10;

    /// Fewest papers `compare_papers` accepts.
    pub const MIN_COMPARE_PAPERS: usize = 2;

    /// Most papers `compare_papers` accepts.
    pub const MAX_COMPARE_PAPERS: usize = 5;

    /// Most papers fed into a research-gap prompt (also the default).
    pub const MAX_GAP_PAPERS: u32 = 10;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact address for the OpenAlex polite pool (optional).
    pub mailto: Option<String>,

    /// Base URL for the works API (for testing with mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional polite-pool contact.
    #[must_use]
    pub fn new(mailto: Option<String>) -> Self {
        Self {
            mailto,
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            mailto: None,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `OPENALEX_MAILTO` and `OPENALEX_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL override is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let mailto = std::env::var("OPENALEX_MAILTO").ok().filter(|m| !m.trim().is_empty());
        let mut config = Self::new(mailto);

        if let Ok(base_url) = std::env::var("OPENALEX_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }

        Ok(config)
    }

    /// Override the API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> anyhow::Result<Self> {
        let parsed = url::Url::parse(base_url)?;
        self.base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check if a polite-pool contact is configured.
    #[must_use]
    pub const fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
