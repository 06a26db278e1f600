//! Resource and data source lifecycle against a mock Foreman server

use foremanctl::provider::organization::{data_source, resource};
use foremanctl::{ClientConfig, ForemanClient, ForemanError, ProviderContext, ResourceData};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server: &MockServer) -> ProviderContext {
    let config = ClientConfig::new("mock.foreman.test", "admin", "changeme");
    ProviderContext::new(ForemanClient::with_base_url(config, &server.uri()))
}

fn org_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({"id": id, "name": name, "title": name})
}

#[tokio::test]
async fn test_create_read_update_delete_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organizations"))
        .and(body_json(serde_json::json!({"name": "production"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(org_json(11, "production")))
        .expect(1)
        .mount(&server)
        .await;

    // First read sees the created organization, a second read after delete 404s
    Mock::given(method("GET"))
        .and(path("/organizations/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(11, "production")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/organizations/11"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/organizations/11"))
        .and(body_json(serde_json::json!({"id": 11, "name": "staging"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(11, "staging")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/organizations/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(11, "staging")))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);

    let mut d = ResourceData::new();
    d.set("name", "production");
    resource::create(&ctx, &mut d).await.unwrap();
    assert_eq!(d.id(), "11");

    let mut read_back = ResourceData::with_id(d.id());
    resource::read(&ctx, &mut read_back).await.unwrap();
    assert_eq!(read_back.get_str("name"), Some("production"));

    d.set("name", "staging");
    resource::update(&ctx, &mut d).await.unwrap();
    assert_eq!(d.id(), "11");
    assert_eq!(d.get_str("name"), Some("staging"));

    resource::delete(&ctx, &mut d).await.unwrap();
    assert_eq!(d.id(), "");

    let mut gone = ResourceData::with_id("11");
    let err = resource::read(&ctx, &mut gone).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_data_source_resolves_single_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("search", "name=\"production\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 3,
            "subtotal": 1,
            "page": 1,
            "per_page": 20,
            "search": "name=\"production\"",
            "results": [org_json(11, "production")]
        })))
        .mount(&server)
        .await;

    let ctx = context(&server);
    let mut d = ResourceData::new();
    d.set("name", "production");
    data_source::read(&ctx, &mut d).await.unwrap();

    assert_eq!(d.id(), "11");
    assert_eq!(d.get_str("name"), Some("production"));
}

#[tokio::test]
async fn test_data_source_ambiguous_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subtotal": 3,
            "results": [org_json(1, "a"), org_json(2, "a"), org_json(3, "a")]
        })))
        .mount(&server)
        .await;

    let ctx = context(&server);
    let mut d = ResourceData::new();
    d.set("name", "a");
    match data_source::read(&ctx, &mut d).await {
        Err(ForemanError::DataSource(msg)) => assert!(msg.contains("more than 1 result")),
        other => panic!("Expected ForemanError::DataSource, got {:?}", other),
    }
}

#[tokio::test]
async fn test_import_then_read_matches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(4, "legacy")))
        .mount(&server)
        .await;

    let ctx = context(&server);
    let d = resource::import(&ctx, "4").await.unwrap();
    assert_eq!(d.id(), "4");
    assert_eq!(d.get_str("name"), Some("legacy"));
}
