//! Tests for the HTTP transport

use super::*;
use crate::error::{ApiErrorKind, Error};
use crate::params::QueryParams;
use pretty_assertions::assert_eq;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn envelope_body() -> serde_json::Value {
    serde_json::json!({
        "resource": "commonallplayers",
        "parameters": {"LeagueID": "00"},
        "resultSets": [{
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST"],
            "rowSet": [[2544, "LeBron James"]]
        }]
    })
}

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, "https://stats.nba.com/stats");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(
        config.default_headers.get("Referer").map(String::as_str),
        Some("https://www.nba.com/")
    );
    assert_eq!(
        config.default_headers.get("Accept").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("http://localhost:9000/stats")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "http://localhost:9000/stats");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.default_headers.len(), 3);
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    assert!(matches!(
        HttpClient::with_config(config),
        Err(Error::InvalidUrl(_))
    ));

    let config = HttpClientConfig::builder().base_url("mailto:a@b.c").build();
    assert!(matches!(
        HttpClient::with_config(config),
        Err(Error::Config { .. })
    ));
}

#[test_case("https://stats.nba.com/stats", "https://stats.nba.com/stats/scoreboardv2"; "no slash")]
#[test_case("https://stats.nba.com/stats/", "https://stats.nba.com/stats/scoreboardv2"; "trailing slash")]
#[test_case("http://localhost:8080", "http://localhost:8080/scoreboardv2"; "bare host")]
fn test_build_url_joins_path(base: &str, expected: &str) {
    let config = HttpClientConfig::builder().base_url(base).build();
    let client = HttpClient::with_config(config).unwrap();
    let url = client.build_url("scoreboardv2", &QueryParams::new()).unwrap();
    assert_eq!(url.as_str(), expected);
}

#[test]
fn test_build_url_sorts_query() {
    let client = HttpClient::new().unwrap();
    let params = QueryParams::new()
        .set("Season", "2023-24")
        .set("LeagueID", "00")
        .set("IsOnlyCurrentSeason", 1);
    let url = client.build_url("commonallplayers", &params).unwrap();
    assert_eq!(
        url.query(),
        Some("IsOnlyCurrentSeason=1&LeagueID=00&Season=2023-24")
    );
}

#[tokio::test]
async fn test_get_envelope_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commonallplayers"))
        .and(query_param("LeagueID", "00"))
        .and(query_param("Season", "2023-24"))
        .and(header("Referer", "https://www.nba.com/"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = QueryParams::new()
        .set("LeagueID", "00")
        .set("Season", "2023-24");
    let raw = client.fetch("commonallplayers", &params).await.unwrap();

    assert_eq!(raw.status_code, 200);
    assert!(raw.url.contains("/commonallplayers?"));
    assert_eq!(raw.envelope.resource.as_deref(), Some("commonallplayers"));
    assert_eq!(raw.envelope.result_sets.len(), 1);
    assert_eq!(raw.envelope.result_sets[0].row_set.len(), 1);
}

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("User-Agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .user_agent("test-agent/1.0")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    client
        .fetch("leagueleaders", &QueryParams::new())
        .await
        .unwrap();
}

#[test_case(400, ApiErrorKind::InvalidRequest)]
#[test_case(403, ApiErrorKind::Unauthorized)]
#[test_case(404, ApiErrorKind::NotFound)]
#[test_case(429, ApiErrorKind::RateLimited)]
#[test_case(500, ApiErrorKind::Server)]
#[test_case(504, ApiErrorKind::Timeout)]
#[tokio::test]
async fn test_error_status_classified(status: u16, expected: ApiErrorKind) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch("boxscoretraditionalv2", &QueryParams::new())
        .await
        .unwrap_err();

    match err {
        Error::Api { status: got, kind, url } => {
            assert_eq!(got, status);
            assert_eq!(kind, expected);
            assert!(url.ends_with("/boxscoretraditionalv2"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch("scoreboardv2", &QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_empty_object_is_empty_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let raw = client
        .fetch("scoreboardv2", &QueryParams::new())
        .await
        .unwrap();
    assert!(raw.envelope.result_sets.is_empty());
}

#[tokio::test]
async fn test_null_fields_are_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resource": null,
            "resultSets": [
                {"name": "GameHeader", "headers": null, "rowSet": [["2024-01-15"], null]},
                {"name": null, "headers": ["A"], "rowSet": null}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let raw = client
        .fetch("scoreboardv2", &QueryParams::new())
        .await
        .unwrap();
    let sets = &raw.envelope.result_sets;
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].row_set.len(), 2);
    assert!(sets[0].row_set[1].is_empty());
    assert!(sets[0].headers.is_empty());
    assert_eq!(sets[1].name, "");
    assert!(sets[1].row_set.is_empty());
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope_body())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .fetch("scoreboardv2", &QueryParams::new())
        .await
        .unwrap_err();
    match err {
        Error::Http(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}
