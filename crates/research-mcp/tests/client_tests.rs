//! OpenAlex client tests against a mock server.
//!
//! Covers query construction, ID resolution and the error taxonomy.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_mcp::client::OpenAlexClient;
use research_mcp::config::Config;
use research_mcp::error::ClientError;
use research_mcp::models::{NO_ABSTRACT, SortKey};

fn client_for(mock_server: &MockServer) -> OpenAlexClient {
    OpenAlexClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

fn sample_work(key: &str, title: &str, year: i32, citations: u64) -> serde_json::Value {
    json!({
        "id": format!("https://openalex.org/{key}"),
        "title": title,
        "publication_year": year,
        "cited_by_count": citations,
        "doi": format!("https://doi.org/10.1234/{key}"),
        "type": "article",
        "authorships": [
            {"author": {"id": "https://openalex.org/A1", "display_name": "Ada Lovelace"}},
            {"author": {"id": "https://openalex.org/A2", "display_name": "Alan Turing"}}
        ],
        "abstract_inverted_index": {"Machines": [0], "can": [1], "think.": [2]}
    })
}

fn works_page(works: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "meta": {"count": works.len(), "page": 1, "per_page": 25},
        "results": works
    })
}

// =============================================================================
// search_works
// =============================================================================

#[tokio::test]
async fn test_search_sends_expected_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("search", "machine learning"))
        .and(query_param("per_page", "5"))
        .and(query_param("sort", "cited_by_count:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_page(vec![
            sample_work("W1", "First", 2020, 900),
            sample_work("W2", "Second", 2021, 100),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let papers = client
        .search_works("machine learning", 5, SortKey::CitedByCount, None)
        .await
        .unwrap();

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title, "First");
    assert_eq!(papers[1].title, "Second");
    assert_eq!(papers[0].authors, "Ada Lovelace, Alan Turing");
    assert_eq!(papers[0].url, "https://doi.org/10.1234/W1");
    assert_eq!(papers[0].abstract_text(), "Machines can think.");
}

#[tokio::test]
async fn test_search_year_from_builds_inclusive_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "publication_year:>2019"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_page(vec![sample_work(
            "W3", "Recent", 2020, 5,
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let papers = client
        .search_works("graphs", 10, SortKey::PublicationDate, Some(2020))
        .await
        .unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].publication_year, Some(2020));
}

#[tokio::test]
async fn test_search_relevance_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("sort", "relevance_score:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_page(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let papers = client.search_works("x", 3, SortKey::RelevanceScore, None).await.unwrap();
    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_search_server_error_is_a_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search_works("x", 3, SortKey::CitedByCount, None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_search_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search_works("x", 3, SortKey::CitedByCount, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_search_rejects_non_integer_abstract_position() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": "https://openalex.org/W9",
                "abstract_inverted_index": {"broken": [0.5]}
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search_works("x", 3, SortKey::CitedByCount, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

// =============================================================================
// fetch_work
// =============================================================================

#[tokio::test]
async fn test_fetch_url_and_bare_id_resolve_to_same_work() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_work("W123", "Resolved", 2019, 7)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let from_url = client.fetch_work("https://upstream.example/works/W123").await.unwrap();
    let from_bare = client.fetch_work("W123").await.unwrap();

    assert_eq!(from_url, from_bare);
    assert_eq!(from_bare.id, "https://openalex.org/W123");
}

#[tokio::test]
async fn test_fetch_dot_segments_never_leave_works() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {"version": "1"}})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    for bad in ["..", ".", "   ", "https://example.com"] {
        let err = client.fetch_work(bad).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidId(_)), "{bad:?} gave {err:?}");
    }
    assert!(client.get_cited_by("..", 5).await.is_err());

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_fetch_id_is_one_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W1%3Fsearch=x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_work("W1", "Escaped", 2020, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let paper = client.fetch_work("W1?search=x").await.unwrap();
    assert_eq!(paper.title, "Escaped");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].url.query_pairs().all(|(key, _)| key != "search"));
}

#[tokio::test]
async fn test_fetch_404_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_work("W404").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_fetch_non_200_success_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_work("W1").await.unwrap_err();
    assert_eq!(err.status_code(), Some(204));
}

#[tokio::test]
async fn test_fetch_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_work("W1").await.unwrap_err();

    assert!(matches!(err, ClientError::EmptyResponse));
    assert_eq!(err.to_string(), "OpenAlex returned empty response");
}

#[tokio::test]
async fn test_fetch_without_abstract_uses_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "https://openalex.org/W5",
            "title": null,
            "abstract_inverted_index": null
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let paper = client.fetch_work("W5").await.unwrap();

    assert_eq!(paper.title, "No title");
    assert_eq!(paper.abstract_text(), NO_ABSTRACT);
    assert_eq!(paper.url, "https://openalex.org/W5");
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_work("W1", "Slow", 2020, 1))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config =
        Config::for_testing(&mock_server.uri()).with_request_timeout(Duration::from_millis(200));
    let client = OpenAlexClient::new(config).unwrap();

    let err = client.fetch_work("W1").await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(200)));
}

#[tokio::test]
async fn test_transport_error_is_a_value() {
    // Nothing listens on port 1.
    let client = OpenAlexClient::new(Config::for_testing("http://127.0.0.1:1")).unwrap();
    let err = client.fetch_work("W1").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

// =============================================================================
// Citation edges
// =============================================================================

#[tokio::test]
async fn test_cited_by_uses_cites_filter_and_caps_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "cites:W77"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_page(vec![
            sample_work("W1", "A", 2020, 3),
            sample_work("W2", "B", 2021, 2),
            sample_work("W3", "C", 2022, 1),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let papers = client.get_cited_by("https://openalex.org/W77", 2).await.unwrap();

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title, "A");
}

#[tokio::test]
async fn test_references_use_cited_by_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "cited_by:W77"))
        .and(query_param("sort", "cited_by_count:desc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(works_page(vec![sample_work("W8", "Foundational", 1999, 5000)])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let papers = client.get_references("W77", 10).await.unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Foundational");
}

#[tokio::test]
async fn test_mailto_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W1"))
        .and(query_param("mailto", "team@example.org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_work("W1", "Polite", 2020, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.mailto = Some("team@example.org".to_string());
    let client = OpenAlexClient::new(config).unwrap();

    let paper = client.fetch_work("W1").await.unwrap();
    assert_eq!(paper.title, "Polite");

    client.close();
}
