//! Integration tests for the gateway event routes.
//!
//! These tests verify:
//! - Authorizer Allow/Deny policies over HTTP
//! - Lifecycle routing for CONNECT, DISCONNECT, MESSAGE and unknown types
//! - The generic handler's fixed response
//! - Structural errors surfacing as 500s

mod common;

use axum::http::StatusCode;
use common::{body_json, body_string, default_app, load_event_fixture, post_json, post_raw, test_app};
use quickstart_server::config::{AuthorizerConfig, Config};
use serde_json::json;

// ============================================================================
// AUTHORIZER
// ============================================================================

#[tokio::test]
async fn test_authorize_allows_test_token_on_connect() {
    let app = default_app();
    let response = post_json(&app, "/events/ws/authorize", &load_event_fixture("authorize_allow")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "principalId": "user",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "execute-api:Invoke",
                    "Effect": "Allow",
                    "Resource": "*"
                }]
            },
            "context": { "ConnectionId": "abc" }
        })
    );
}

#[tokio::test]
async fn test_authorize_denies_without_header() {
    let app = default_app();
    let response =
        post_json(&app, "/events/ws/authorize", &load_event_fixture("authorize_no_header")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Deny");
    assert_eq!(body["principalId"], "user");
    assert!(body.get("context").is_none());
}

#[tokio::test]
async fn test_authorize_denies_on_message_route() {
    let app = default_app();
    let event = json!({
        "requestContext": { "connectionId": "abc", "routeKey": "$default" },
        "headers": { "Authorization": "test" }
    });
    let body = body_json(post_json(&app, "/events/ws/authorize", &event).await).await;
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Deny");
}

#[tokio::test]
async fn test_authorize_lowercase_header_is_denied() {
    let app = default_app();
    let event = json!({
        "requestContext": { "connectionId": "abc", "routeKey": "$connect" },
        "headers": { "authorization": "test" }
    });
    let body = body_json(post_json(&app, "/events/ws/authorize", &event).await).await;
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Deny");
    assert!(body.get("context").is_none());
}

#[tokio::test]
async fn test_authorize_uses_configured_token() {
    let app = test_app(Config {
        authorizer: AuthorizerConfig {
            token: "s3cret".into(),
            route_key: "$connect".into(),
        },
        ..Config::default()
    });

    let mut event = load_event_fixture("authorize_allow");
    let body = body_json(post_json(&app, "/events/ws/authorize", &event).await).await;
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Deny");

    event["headers"]["Authorization"] = json!("s3cret");
    let body = body_json(post_json(&app, "/events/ws/authorize", &event).await).await;
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Allow");
}

#[tokio::test]
async fn test_authorize_missing_request_context_is_server_error() {
    let app = default_app();
    let response = post_json(&app, "/events/ws/authorize", &json!({ "headers": {} })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Internal Server Error");
}

#[tokio::test]
async fn test_debug_mode_exposes_error_detail() {
    let app = test_app(Config {
        debug: true,
        ..Config::default()
    });
    let event = json!({ "requestContext": { "connectionId": "abc", "routeKey": "$connect" } });
    let response = post_json(&app, "/events/ws/authorize", &event).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Missing required field: headers");
}

// ============================================================================
// LIFECYCLE ROUTER
// ============================================================================

#[tokio::test]
async fn test_ws_connect() {
    let app = default_app();
    let response = post_json(&app, "/events/ws", &load_event_fixture("ws_connect")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "statusCode": 200,
            "body": "Connecting... (event_type=CONNECT, connection_id=abc)"
        })
    );
}

#[tokio::test]
async fn test_ws_disconnect() {
    let app = default_app();
    let response = post_json(&app, "/events/ws", &load_event_fixture("ws_disconnect")).await;
    assert_eq!(
        body_json(response).await,
        json!({
            "statusCode": 200,
            "body": "Disconnecting... (event_type=DISCONNECT, connection_id=xyz)"
        })
    );
}

#[tokio::test]
async fn test_ws_message() {
    let app = default_app();
    let response = post_json(&app, "/events/ws", &load_event_fixture("ws_message")).await;
    assert_eq!(
        body_json(response).await,
        json!({
            "statusCode": 200,
            "body": "Hello from event_type=MESSAGE, connection_id=xyz"
        })
    );
}

#[tokio::test]
async fn test_ws_unknown_event_type_has_no_body() {
    let app = default_app();
    let event = json!({ "requestContext": { "connectionId": "xyz", "eventType": "RECONNECT" } });
    let response = post_json(&app, "/events/ws", &event).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "statusCode": 200 }));
}

#[tokio::test]
async fn test_ws_missing_event_type_is_server_error() {
    let app = default_app();
    let event = json!({ "requestContext": { "connectionId": "xyz" } });
    let response = post_json(&app, "/events/ws", &event).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_ws_message_without_body_is_server_error() {
    let app = test_app(Config {
        debug: true,
        ..Config::default()
    });
    let event = json!({ "requestContext": { "connectionId": "xyz", "eventType": "MESSAGE" } });
    let response = post_json(&app, "/events/ws", &event).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Missing required field: body");
}

#[tokio::test]
async fn test_ws_non_object_body_is_server_error() {
    let app = default_app();
    let response = post_raw(&app, "/events/ws", "[\"CONNECT\"]").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// GENERIC HANDLER
// ============================================================================

fn hello_world() -> serde_json::Value {
    json!({
        "isBase64Encoded": false,
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": "{\"Hello\":\"World!\"}"
    })
}

#[tokio::test]
async fn test_http_event_fixed_response() {
    let app = default_app();
    let event = json!({ "rawPath": "/anything", "queryStringParameters": { "q": "1" } });
    let response = post_json(&app, "/events/http", &event).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, hello_world());
}

#[tokio::test]
async fn test_http_event_accepts_non_json_body() {
    let app = default_app();
    let response = post_raw(&app, "/events/http", "definitely not json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, hello_world());

    let response = post_raw(&app, "/events/http", "").await;
    assert_eq!(response.status(), StatusCode::OK);
}
