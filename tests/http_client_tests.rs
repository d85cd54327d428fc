//! Integration tests for the reqwest-backed transport.
//!
//! These tests run the client against a local mock server and check the
//! wire-level behavior: paths, headers, bodies, status handling and refused
//! connections.

use std::net::TcpListener;
use std::sync::Arc;

use jsonapi_model::clients::{HttpClient, Transport, TransportError};
use jsonapi_model::rest::ResourceDefinition;
use jsonapi_model::{Endpoint, HostUrl, Model, ModelConfig, ResourceError, SerializationType};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOTE_ID: &str = "7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69";

fn client_for(uri: &str) -> HttpClient {
    let config = ModelConfig::builder()
        .host(HostUrl::new(uri).unwrap())
        .user_agent_prefix("NotesApp/1.0")
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn notes(client: HttpClient) -> Model<HttpClient> {
    Model::new(
        ResourceDefinition::builder()
            .endpoint(Endpoint::new("notes").unwrap())
            .serialize_as(SerializationType::new("notes").unwrap())
            .attributes(["title"])
            .build()
            .unwrap(),
        Arc::new(client),
    )
}

fn jsonapi(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/vnd.api+json")
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_get_sends_jsonapi_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(header("accept", "application/vnd.api+json"))
        .and(header_exists("user-agent"))
        .respond_with(jsonapi(200, json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).get("notes").await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.reason_phrase.as_deref(), Some("OK"));
    assert_eq!(response.body, r#"{"data":[]}"#);
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/notes/{NOTE_ID}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = client_for(&server.uri())
        .delete(&format!("notes/{NOTE_ID}"))
        .await
        .unwrap();

    assert_eq!(response.code, 404);
    assert_eq!(response.reason_phrase.as_deref(), Some("Not Found"));
    assert!(!response.has_body());
}

#[tokio::test]
async fn test_refused_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let host = format!("http://127.0.0.1:{port}");
    let result = client_for(&host).get("notes").await;

    assert!(matches!(
        result,
        Err(TransportError::ConnectionRefused { host: ref refused }) if *refused == host
    ));
}

// ============================================================================
// Lifecycle Over HTTP
// ============================================================================

#[tokio::test]
async fn test_full_lifecycle_against_server() {
    let server = MockServer::start().await;
    let stored = json!({ "data": {
        "id": NOTE_ID,
        "type": "notes",
        "attributes": { "title": "Groceries" }
    } });

    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(body_json(json!({ "data": {
            "type": "notes",
            "attributes": { "title": "Groceries" }
        } })))
        .respond_with(jsonapi(201, stored.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/notes/{NOTE_ID}")))
        .respond_with(jsonapi(200, stored))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/notes/{NOTE_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/notes/{NOTE_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notes = notes(client_for(&server.uri()));

    let id = notes
        .create(json!({ "title": "Groceries" }).as_object().unwrap().clone())
        .await
        .unwrap();
    assert_eq!(id, NOTE_ID);

    let mut note = notes.find(&id).await.unwrap();
    note.set("title", "Shopping").unwrap();
    note.save().await.unwrap();

    note.destroy().await.unwrap();
    assert!(note.is_frozen());
}

#[tokio::test]
async fn test_find_missing_note_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/notes/{NOTE_ID}")))
        .respond_with(jsonapi(
            404,
            json!({ "errors": [{ "title": "Not Found", "detail": "no such note" }] }),
        ))
        .mount(&server)
        .await;

    let result = notes(client_for(&server.uri())).find(NOTE_ID).await;

    assert!(matches!(result, Err(ResourceError::NotFound { ref id }) if id == NOTE_ID));
}

#[tokio::test]
async fn test_server_error_detail_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(jsonapi(
            500,
            json!({ "errors": [{ "detail": "database is down" }] }),
        ))
        .mount(&server)
        .await;

    let result = notes(client_for(&server.uri())).all().await;

    match result {
        Err(error @ ResourceError::RequestFailed { .. }) => {
            assert_eq!(error.status_symbol(), Some("internal_server_error"));
            assert_eq!(
                error.to_string(),
                "request failed - internal_server_error (500): database is down"
            );
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unavailable_host_over_http() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = notes(client_for(&format!("http://127.0.0.1:{port}")))
        .all()
        .await;

    assert!(matches!(result, Err(ResourceError::HostUnavailable { .. })));
}
