//! End-to-end tests for the REST resource client behind the
//! synchronization adapter, against a wiremock server.

use std::sync::Arc;

use seamline::adapters::{FileTokenStore, RestResource};
use seamline::api::{ApiSync, KeyedApiSync};
use seamline::config::ApiConfig;
use seamline::error::ApiError;
use seamline::models::{Paginator, RequestOverrides, Search};
use seamline::traits::{FieldKey, HttpError, StoredToken, TokenStore};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Color {
    id: i64,
    name: String,
}

/// Token store persisted under a temp directory, pre-seeded with a token.
fn seeded_tokens(dir: &TempDir) -> Arc<FileTokenStore> {
    let store = FileTokenStore::with_path(dir.path().join(".token.json"));
    store.save(&StoredToken::new("tok-abc")).unwrap();
    Arc::new(store)
}

fn adapter(server: &MockServer, tokens: Arc<FileTokenStore>) -> ApiSync<Color> {
    let config = ApiConfig::new().with_base_url(format!("{}/api", server.uri()));
    let resource = Arc::new(RestResource::<Color>::from_config(&config, "colors"));
    ApiSync::new(resource, tokens)
}

fn keyed_adapter(server: &MockServer, tokens: Arc<FileTokenStore>) -> KeyedApiSync<Color> {
    let config = ApiConfig::new().with_base_url(format!("{}/api", server.uri()));
    let resource = Arc::new(RestResource::<Color>::from_config(&config, "colors"));
    KeyedApiSync::new(resource, tokens)
}

#[tokio::test]
async fn list_sends_merged_body_and_bearer_header() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // Overriding only `search` must leave the other three blocks at their
    // process-wide defaults on the wire.
    let expected_body = serde_json::json!({
        "filter": { "field": "", "items": [], "status": [] },
        "paginator": { "page": 1, "pageSize": 10 },
        "search": { "field": "name", "term": "Black" },
        "sorting": { "column": "id", "direction": "desc" }
    });

    Mock::given(method("POST"))
        .and(path("/api/colors/list"))
        .and(header("authorization", "Bearer tok-abc"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [ { "id": 7, "name": "Black" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = adapter(&server, seeded_tokens(&dir));
    let envelope = api
        .get_items(
            RequestOverrides::new().with_search(Search {
                field: "name".to_string(),
                term: "Black".to_string(),
            }),
            |_| {},
        )
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(
        envelope.data.unwrap(),
        vec![Color {
            id: 7,
            name: "Black".to_string()
        }]
    );
}

#[tokio::test]
async fn unbounded_page_size_reaches_the_wire() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let expected_body = serde_json::json!({
        "filter": { "field": "", "items": [], "status": [] },
        "paginator": { "page": 1, "pageSize": -1 },
        "search": { "field": "", "term": "" },
        "sorting": { "column": "id", "direction": "desc" }
    });

    Mock::given(method("POST"))
        .and(path("/api/colors/list"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = adapter(&server, seeded_tokens(&dir));
    api.get_items(
        RequestOverrides::new().with_paginator(Paginator::unbounded()),
        |_| {},
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn non_2xx_is_a_transport_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/colors/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = adapter(&server, seeded_tokens(&dir));
    let err = api.get_item_by_pk("7", |_| {}).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport(HttpError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn failure_envelope_becomes_logical_error_in_sync_variant() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("PUT"))
        .and(path("/api/colors/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "name already taken"
        })))
        .mount(&server)
        .await;

    let api = adapter(&server, seeded_tokens(&dir));
    let err = api
        .update_item_by_pk_sync(
            "7",
            &Color {
                id: 7,
                name: "Jet Black".to_string(),
            },
            |_| {},
            |_| panic!("success callback must not run"),
        )
        .await
        .unwrap_err();

    assert!(err.is_logical());
    assert!(err.to_string().contains("name already taken"));
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    // empty store: no token file was ever written
    let tokens = Arc::new(FileTokenStore::with_path(dir.path().join(".token.json")));

    // no mock is mounted; a dispatched request would 404 and fail differently
    let api = adapter(&server, tokens);
    let err = api.get_item_by_pk("7", |_| {}).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingToken));
}

#[tokio::test]
async fn keyed_routes_address_the_foreign_column() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/colors/by/group_id/3"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "id": 7, "name": "Black" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/colors/by/group_id/3/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [ { "id": 7, "name": "Black" }, { "id": 8, "name": "Navy" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = keyed_adapter(&server, seeded_tokens(&dir));
    let key = FieldKey::new("group_id", "3");

    let single = api.get_item_by(&key, |_| {}).await.unwrap();
    assert_eq!(single.data.unwrap().id, 7);

    let batch = api
        .update_items_by(
            &key,
            &[
                Color {
                    id: 7,
                    name: "Black".to_string(),
                },
                Color {
                    id: 8,
                    name: "Navy".to_string(),
                },
            ],
            |_| {},
        )
        .await
        .unwrap();
    assert_eq!(batch.data.unwrap().len(), 2);
}

#[tokio::test]
async fn loading_bracket_fires_around_the_http_call() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/api/colors/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .mount(&server)
        .await;

    let api = adapter(&server, seeded_tokens(&dir));
    let mut events = Vec::new();
    api.delete_item_by_pk("7", |on| events.push(on))
        .await
        .unwrap();

    assert_eq!(events, vec![true, false]);
}
