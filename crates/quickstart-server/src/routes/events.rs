//! Gateway event entry points.
//!
//! Each route accepts the raw event JSON a gateway would hand to a function
//! and answers with that function's return value. This is the local
//! gateway; deployed functions run under `quickstart-lambda`. Invocation
//! metadata is read from request headers.

use crate::error::ApiError;
use crate::middleware::ClientAddr;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Extension, Json,
};
use quickstart_core::{http, lifecycle, parse_event};
use quickstart_types::{AccessPolicy, InvocationContext, ResponseEnvelope};
use serde_json::Value;
use std::sync::Arc;

pub const HTTP_FUNCTION: &str = "http-handler";
pub const WS_ROUTER_FUNCTION: &str = "ws-router";
pub const WS_AUTHORIZER_FUNCTION: &str = "ws-authorizer";

const REQUEST_ID_HEADERS: [&str; 2] = ["x-request-id", "x-amzn-requestid"];
const TRACE_ID_HEADERS: [&str; 2] = ["x-amzn-trace-id", "traceparent"];

fn first_header<'a>(headers: &'a HeaderMap, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|v| v.to_str().ok())
        .find(|v| !v.is_empty())
}

/// Build the invocation context for one request.
pub fn invocation_context(
    function_name: &str,
    headers: &HeaderMap,
    client: Option<&ClientAddr>,
) -> InvocationContext {
    let mut context = match first_header(headers, &REQUEST_ID_HEADERS) {
        Some(id) => InvocationContext::with_request_id(function_name, id),
        None => InvocationContext::new(function_name),
    };
    if let Some(trace) = first_header(headers, &TRACE_ID_HEADERS) {
        context = context.trace_id(trace);
    }
    if let Some(client) = client {
        context = context.client_addr(client.host.clone());
    }
    context
}

/// POST /events/http - Generic event handler. Accepts any body.
#[utoipa::path(
    post,
    path = "/events/http",
    tag = "Events",
    responses((status = 200, description = "Fixed hello-world response", body = ResponseEnvelope))
)]
pub async fn http_event(
    client: Option<Extension<ClientAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<ResponseEnvelope> {
    let context = invocation_context(HTTP_FUNCTION, &headers, client.as_ref().map(|Extension(c)| c));
    let event = serde_json::from_slice::<Value>(&body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));

    Json(http::handle(&event, &context))
}

/// POST /events/ws - WebSocket lifecycle router.
#[utoipa::path(
    post,
    path = "/events/ws",
    tag = "Events",
    responses(
        (status = 200, description = "Action taken for the event", body = ResponseEnvelope),
        (status = 500, description = "Event is missing a required field")
    )
)]
pub async fn ws_event(
    State(state): State<Arc<AppState>>,
    client: Option<Extension<ClientAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let context = invocation_context(WS_ROUTER_FUNCTION, &headers, client.as_ref().map(|Extension(c)| c));
    let debug = state.config.debug;

    parse_event(&body)
        .and_then(|event| lifecycle::route(&event, &context))
        .map(Json)
        .map_err(|e| ApiError::new(e, context.request_id.clone(), debug))
}

/// POST /events/ws/authorize - WebSocket connection authorizer.
#[utoipa::path(
    post,
    path = "/events/ws/authorize",
    tag = "Events",
    responses(
        (status = 200, description = "Allow or Deny policy", body = AccessPolicy),
        (status = 500, description = "Event is missing a required field")
    )
)]
pub async fn ws_authorize(
    State(state): State<Arc<AppState>>,
    client: Option<Extension<ClientAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AccessPolicy>, ApiError> {
    let context =
        invocation_context(WS_AUTHORIZER_FUNCTION, &headers, client.as_ref().map(|Extension(c)| c));
    let debug = state.config.debug;

    parse_event(&body)
        .and_then(|event| state.authorizer.authorize(&event, &context))
        .map(Json)
        .map_err(|e| ApiError::new(e, context.request_id.clone(), debug))
}
