use std::time::Duration;

use opensecrets_api::{Client, ResponseCache, Transport};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn second_identical_call_is_served_from_cache() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("cand_summary.json");

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("method", "candSummary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = Transport::with_cache(ResponseCache::new(Duration::from_secs(60)));
    let client = Client::with_transport(&mock_server.uri(), "test-key", transport);

    let first = client.candidates.summary("N00007360", Some("2014")).await.unwrap();
    let second = client.candidates.summary("N00007360", Some("2014")).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn different_urls_do_not_share_cache_entries() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("cand_summary.json");

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("method", "candSummary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(2)
        .mount(&mock_server)
        .await;

    let transport = Transport::with_cache(ResponseCache::new(Duration::from_secs(60)));
    let client = Client::with_transport(&mock_server.uri(), "test-key", transport);

    client.candidates.summary("N00007360", Some("2014")).await.unwrap();
    client.candidates.summary("N00007360", Some("2016")).await.unwrap();
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("indexp.json");

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("method", "independentExpend"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(2)
        .mount(&mock_server)
        .await;

    let transport = Transport::with_cache(ResponseCache::new(Duration::from_millis(20)));
    let client = Client::with_transport(&mock_server.uri(), "test-key", transport);

    client.indexp.get().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    client.indexp.get().await.unwrap();
}

#[tokio::test]
async fn error_responses_are_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error": "down"}"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let transport = Transport::with_cache(ResponseCache::new(Duration::from_secs(60)));
    let client = Client::with_transport(&mock_server.uri(), "test-key", transport);

    assert!(client.indexp.get().await.is_err());
    assert!(client.indexp.get().await.is_err());
}
