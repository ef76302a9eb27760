//! OpenAlex API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Request logging middleware
//! - A fixed per-request timeout, no retries
//!
//! Every operation issues at most one upstream request and returns its
//! failure as a [`ClientError`] value.

mod middleware;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{NormalizedPaper, RawWork, SortKey, WorksPage};

pub use middleware::RequestLogging;

/// OpenAlex works API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Works API base URL.
    base_url: String,

    /// Polite-pool contact (optional).
    mailto: Option<String>,

    /// Request timeout, reported on timeout errors.
    request_timeout: Duration,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let user_agent = match &config.mailto {
            Some(mailto) => format!("{} (mailto:{mailto})", api::USER_AGENT),
            None => api::USER_AGENT.to_string(),
        };

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let client = ClientBuilder::new(client).with(RequestLogging).build();

        Ok(Self {
            client,
            base_url: config.base_url,
            mailto: config.mailto,
            request_timeout: config.request_timeout,
        })
    }

    /// Check if a polite-pool contact is configured.
    #[must_use]
    pub fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search works, sorted descending by `sort_by`.
    ///
    /// `year_from` keeps papers published in or after that year.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a malformed body.
    pub async fn search_works(
        &self,
        query: &str,
        max_results: u32,
        sort_by: SortKey,
        year_from: Option<i32>,
    ) -> ClientResult<Vec<NormalizedPaper>> {
        tracing::debug!(query, max_results, sort = sort_by.as_str(), ?year_from, "Searching works");

        let mut params = vec![
            ("search".to_string(), query.to_string()),
            ("per_page".to_string(), max_results.to_string()),
            ("sort".to_string(), sort_by.sort_param()),
        ];

        if let Some(year) = year_from {
            params.push(("filter".to_string(), year_filter(year)));
        }

        self.list_works(params).await
    }

    /// Fetch a single work by ID.
    ///
    /// Accepts a bare key ("W123") or a URL whose last path segment is the key.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, any status other than 200, an empty
    /// body, or a malformed body.
    pub async fn fetch_work(&self, paper_id: &str) -> ClientResult<NormalizedPaper> {
        let work_id = checked_work_id(paper_id)?;
        let url = self.work_url(&work_id)?;

        tracing::debug!(%work_id, "Fetching work");

        let response = self.send(self.client.get(url).query(&self.base_params())).await?;
        let status = response.status();

        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ClientError::EmptyResponse);
        }

        let work: RawWork = serde_json::from_str(&body)?;
        Ok(work.into())
    }

    /// Papers citing the given work, most cited first.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_cited_by(
        &self,
        paper_id: &str,
        max_results: u32,
    ) -> ClientResult<Vec<NormalizedPaper>> {
        let filter = format!("cites:{}", checked_work_id(paper_id)?);
        self.citation_edges(filter, max_results).await
    }

    /// Papers the given work cites, most cited first.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_references(
        &self,
        paper_id: &str,
        max_results: u32,
    ) -> ClientResult<Vec<NormalizedPaper>> {
        let filter = format!("cited_by:{}", checked_work_id(paper_id)?);
        self.citation_edges(filter, max_results).await
    }

    /// Release the connection pool.
    ///
    /// Dropping the last clone has the same effect.
    pub fn close(self) {
        tracing::debug!(base_url = %self.base_url, "Closing OpenAlex client");
    }

    /// `{base}/works/{work_id}`, with the ID encoded as a single path segment.
    fn work_url(&self, work_id: &str) -> ClientResult<url::Url> {
        let mut endpoint = url::Url::parse(&self.base_url)?;
        endpoint
            .path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("works")
            .push(work_id);
        Ok(endpoint)
    }

    async fn citation_edges(
        &self,
        filter: String,
        max_results: u32,
    ) -> ClientResult<Vec<NormalizedPaper>> {
        tracing::debug!(%filter, max_results, "Fetching citation edges");

        let params = vec![
            ("filter".to_string(), filter),
            ("per_page".to_string(), max_results.to_string()),
            ("sort".to_string(), SortKey::CitedByCount.sort_param()),
        ];

        let mut papers = self.list_works(params).await?;
        papers.truncate(max_results as usize);
        Ok(papers)
    }

    /// GET `/works` with the given parameters and normalize the results.
    async fn list_works(&self, mut params: Vec<(String, String)>) -> ClientResult<Vec<NormalizedPaper>> {
        let url = format!("{}/works", self.base_url);
        params.extend(self.base_params());

        let response = self.send(self.client.get(&url).query(&params)).await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ClientError::EmptyResponse);
        }

        let page: WorksPage = serde_json::from_str(&body)?;
        Ok(page.results.into_iter().map(NormalizedPaper::from).collect())
    }

    /// Send a request, mapping timeouts to [`ClientError::Timeout`].
    async fn send(&self, request: RequestBuilder) -> ClientResult<reqwest::Response> {
        request.send().await.map_err(|err| match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => {
                ClientError::Timeout(self.request_timeout)
            }
            other => ClientError::from(other),
        })
    }

    /// Query parameters sent with every request.
    fn base_params(&self) -> Vec<(String, String)> {
        self.mailto
            .as_ref()
            .map(|mailto| vec![("mailto".to_string(), mailto.clone())])
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("base_url", &self.base_url)
            .field("has_mailto", &self.has_mailto())
            .finish()
    }
}

/// Resolve a paper reference to its bare OpenAlex key.
///
/// `"https://openalex.org/W123"`, `"openalex.org/W123"` and `" W123 "` all
/// resolve to `"W123"`.
#[must_use]
pub fn resolve_work_id(paper_id: &str) -> String {
    let trimmed = paper_id.trim();

    if let Ok(url) = url::Url::parse(trimmed) {
        if matches!(url.scheme(), "http" | "https") {
            return url
                .path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
                .unwrap_or_default()
                .to_string();
        }
    }

    if trimmed.contains("openalex.org/") {
        if let Some(segment) = trimmed.rsplit('/').find(|s| !s.is_empty()) {
            return segment.to_string();
        }
    }

    trimmed.to_string()
}

/// Returns true if `work_id` can name a work.
///
/// Empty keys and the dot segments are rejected; they would address a
/// different resource than `/works/{id}`.
#[must_use]
pub fn is_valid_work_id(work_id: &str) -> bool {
    !matches!(work_id, "" | "." | "..")
}

fn checked_work_id(paper_id: &str) -> ClientResult<String> {
    let work_id = resolve_work_id(paper_id);
    if is_valid_work_id(&work_id) {
        Ok(work_id)
    } else {
        Err(ClientError::InvalidId(paper_id.trim().to_string()))
    }
}

/// Upstream filter selecting works published in or after `year_from`.
#[must_use]
pub fn year_filter(year_from: i32) -> String {
    format!("publication_year:>{}", year_from.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_work_id() {
        assert_eq!(resolve_work_id("W123"), "W123");
        assert_eq!(resolve_work_id("  W123\n"), "W123");
        assert_eq!(resolve_work_id("https://openalex.org/W123"), "W123");
        assert_eq!(resolve_work_id("https://upstream.example/works/W123"), "W123");
        assert_eq!(resolve_work_id("https://upstream.example/works/W123/"), "W123");
        assert_eq!(resolve_work_id("openalex.org/W123"), "W123");
        assert_eq!(resolve_work_id("https://example.com"), "");
    }

    #[test]
    fn test_dot_segments_are_not_work_ids() {
        assert!(is_valid_work_id("W123"));
        assert!(!is_valid_work_id(""));
        assert!(!is_valid_work_id("."));
        assert!(!is_valid_work_id(".."));
        assert!(checked_work_id(" .. ").is_err());
    }

    #[test]
    fn test_work_url_encodes_id_as_one_segment() {
        let client = OpenAlexClient::new(Config::for_testing("http://localhost:9/api")).unwrap();
        let url = client.work_url("W1?x=1#frag").unwrap();
        assert_eq!(url.path(), "/api/works/W1%3Fx=1%23frag");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_year_filter_is_inclusive() {
        assert_eq!(year_filter(2020), "publication_year:>2019");
    }

    #[test]
    fn test_debug_shows_base_url() {
        let client = OpenAlexClient::new(Config::for_testing("http://localhost:9")).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("localhost:9"));
        assert!(debug.contains("has_mailto"));
    }
}
