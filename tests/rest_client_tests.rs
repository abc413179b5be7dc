//! Integration tests for the REST transport.
//!
//! These tests run [`RestClient`] against a local mock server and verify the
//! wire format: headers, `{"data": ...}` wrapping, query strings and the
//! error surface for non-2xx responses.

use itglue_api::clients::Transport;
use itglue_api::{ApiKey, ApiUrl, HttpError, ItGlueConfig, RestClient};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer) -> RestClient {
    let config = ItGlueConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

// ============================================================================
// Headers and body wrapping
// ============================================================================

#[tokio::test]
async fn test_read_sends_json_api_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(header("x-api-key", "test-api-key"))
        .and(header("accept", "application/vnd.api+json"))
        .and(header("content-type", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let document = client.read("/organizations", None).await.unwrap();

    assert_eq!(document, json!({"data": []}));
}

#[tokio::test]
async fn test_create_wraps_payload_and_relationships() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/configurations"))
        .and(body_json(json!({
            "data": {
                "type": "configurations",
                "attributes": {"name": "srv"},
                "relationships": {
                    "configuration_interfaces": [
                        {
                            "type": "configuration_interfaces",
                            "attributes": {"ip_address": "10.0.0.5"}
                        }
                    ]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"type": "configurations", "id": "1", "attributes": {"name": "srv"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut relationships = Map::new();
    relationships.insert(
        "configuration_interfaces".to_string(),
        json!([{"type": "configuration_interfaces", "attributes": {"ip_address": "10.0.0.5"}}]),
    );

    let client = create_client(&server);
    let document = client
        .create(
            "/configurations",
            json!({"type": "configurations", "attributes": {"name": "srv"}}),
            Some(relationships),
        )
        .await
        .unwrap();

    assert_eq!(document["data"]["id"], json!("1"));
}

#[tokio::test]
async fn test_update_uses_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/organizations/7"))
        .and(body_json(json!({
            "data": {"type": "organizations", "id": "7", "attributes": {"name": "Acme"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "organizations", "id": "7", "attributes": {"name": "Acme"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client
        .update(
            "/organizations/7",
            json!({"type": "organizations", "id": "7", "attributes": {"name": "Acme"}}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_destroy_with_empty_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/organizations/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let document = client.destroy("/organizations/7", None).await.unwrap();

    assert_eq!(document, json!({}));
}

// ============================================================================
// Query strings and absolute URLs
// ============================================================================

#[tokio::test]
async fn test_read_flattens_filter_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/configurations"))
        .and(query_param("filter[name]", "ITG-MBP15-13"))
        .and(query_param("filter[id]", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = json!({"filter": {"name": "ITG-MBP15-13", "id": [1, 2], "serial_number": ""}});

    let client = create_client(&server);
    client.read("/configurations", params.as_object()).await.unwrap();
}

#[tokio::test]
async fn test_read_encodes_reserved_characters_in_filter_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("filter[name]", "Smith & Sons"))
        .and(query_param("filter[description]", "C++ Team"))
        .and(query_param("filter[location]", "Rack #4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = json!({
        "filter": {
            "name": "Smith & Sons",
            "description": "C++ Team",
            "location": "Rack #4"
        }
    });

    let client = create_client(&server);
    client.read("/organizations", params.as_object()).await.unwrap();
}

#[tokio::test]
async fn test_follow_uses_absolute_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let next = format!("{}/organizations?page[number]=2", server.uri());
    client.follow(&next).await.unwrap();
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_non_success_status_carries_code_and_raw_body() {
    let server = MockServer::start().await;
    let error_body = r#"{"errors":[{"status":"422","title":"Name can't be blank"}]}"#;

    Mock::given(method("POST"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(422).set_body_string(error_body))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .create("/organizations", json!({"type": "organizations", "attributes": {}}), None)
        .await;

    match result {
        Err(HttpError::Response(error)) => {
            assert_eq!(error.code, 422);
            assert_eq!(error.body, error_body);
            assert!(error.to_string().starts_with("Request failed with response code 422"));
        }
        other => panic!("Expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result: Result<Value, HttpError> = client.read("/organizations", None).await;

    assert!(matches!(result, Err(HttpError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let config = ItGlueConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .api_url(ApiUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let result = client.read("/organizations", None).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}
