/// Integration tests for the subscribe endpoint, with SendFox mocked out.
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, header as request_header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use backend::api::sendfox::SendFoxClient;
use backend::config::SendFoxConfig;
use backend::{app, AppState};

fn test_app(sendfox: Option<SendFoxClient>) -> axum::Router {
    app(Arc::new(AppState { sendfox }))
}

fn sendfox_client(base_url: String) -> SendFoxClient {
    SendFoxClient::new(&SendFoxConfig {
        api_token: "test_token".to_string(),
        list_id: 515151,
        base_url,
    })
}

async fn post_subscribe(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/subscribe")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_check_responds_ok() {
    let response = test_app(None)
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rejects_email_without_at_sign() {
    let mock_server = MockServer::start().await;
    // validation failures must never reach the provider
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test_app(Some(sendfox_client(mock_server.uri())));
    let (status, body) = post_subscribe(app, json!({"email": "nope"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Valid email is required");
}

#[tokio::test]
async fn rejects_missing_email() {
    let app = test_app(None);
    let (status, body) = post_subscribe(app, json!({"source": "hero"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Valid email is required");
}

#[tokio::test]
async fn succeeds_without_credentials_and_calls_nothing() {
    let app = test_app(None);
    let (status, body) = post_subscribe(
        app,
        json!({"email": "listener@example.com", "source": "hero"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn forwards_contact_to_sendfox() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .and(request_header("authorization", "Bearer test_token"))
        .and(body_partial_json(json!({
            "email": "listener@example.com",
            "first_name": "Ada",
            "lists": [515151]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(Some(sendfox_client(mock_server.uri())));
    let (status, body) = post_subscribe(
        app,
        json!({
            "email": "listener@example.com",
            "first_name": "Ada",
            "source": "lead-magnet"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn surfaces_provider_failure_as_generic_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid list"))
        .mount(&mock_server)
        .await;

    let app = test_app(Some(sendfox_client(mock_server.uri())));
    let (status, body) = post_subscribe(app, json!({"email": "listener@example.com"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to subscribe");
}

#[tokio::test]
async fn duplicate_submissions_both_reach_the_provider() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = sendfox_client(mock_server.uri());
    for _ in 0..2 {
        let app = test_app(Some(client.clone()));
        let (status, _) = post_subscribe(app, json!({"email": "listener@example.com"})).await;
        assert_eq!(status, StatusCode::OK);
    }
}
