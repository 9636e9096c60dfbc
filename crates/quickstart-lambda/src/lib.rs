//! Lambda entry points for the Quickstart gateway functions.
//!
//! Each binary in `src/bin` runs one of these handlers under
//! `lambda_runtime`. Invocation metadata comes from the runtime's
//! [`Context`]; the handlers themselves live in `quickstart-core`.

use lambda_runtime::{Context, Error, LambdaEvent};
use quickstart_core::{http, lifecycle, Authorizer};
use quickstart_types::{AccessPolicy, InboundEvent, InvocationContext, ResponseEnvelope};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Build an [`InvocationContext`] from the runtime context.
pub fn invocation_context(ctx: &Context) -> InvocationContext {
    let mut context = InvocationContext::with_request_id(
        ctx.env_config.function_name.as_str(),
        ctx.request_id.as_str(),
    );
    if let Some(trace) = ctx.xray_trace_id.as_deref().filter(|t| !t.is_empty()) {
        context = context.trace_id(trace);
    }
    if let Some(ms) = i64::try_from(ctx.deadline).ok().filter(|ms| *ms > 0) {
        context = context.deadline_ms(ms);
    }
    context
}

/// Generic HTTP function.
pub async fn http_handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, ctx) = event.into_parts();
    Ok(http::handle(&payload, &invocation_context(&ctx)))
}

/// WebSocket lifecycle function.
pub async fn ws_router(event: LambdaEvent<InboundEvent>) -> Result<ResponseEnvelope, Error> {
    let (payload, ctx) = event.into_parts();
    Ok(lifecycle::route(&payload, &invocation_context(&ctx))?)
}

/// WebSocket connection authorizer function.
pub async fn ws_authorizer(event: LambdaEvent<InboundEvent>) -> Result<AccessPolicy, Error> {
    let (payload, ctx) = event.into_parts();
    Ok(Authorizer::default().authorize(&payload, &invocation_context(&ctx))?)
}

/// Plain-text logs for CloudWatch: no ANSI colors and no timestamps, since
/// Lambda adds its own. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickstart_types::Effect;
    use serde_json::json;

    fn runtime_context() -> Context {
        let mut ctx = Context::default();
        ctx.request_id = "req-123".to_string();
        ctx.xray_trace_id = Some("Root=1-abc".to_string());
        ctx.deadline = 4_102_444_800_000;
        ctx
    }

    fn inbound(value: Value) -> InboundEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_invocation_context_from_runtime() {
        let context = invocation_context(&runtime_context());
        assert_eq!(context.request_id, "req-123");
        assert_eq!(context.trace_id.as_deref(), Some("Root=1-abc"));
        assert_eq!(
            context.deadline.map(|d| d.timestamp_millis()),
            Some(4_102_444_800_000)
        );
    }

    #[test]
    fn test_invocation_context_without_deadline() {
        let context = invocation_context(&Context::default());
        assert!(context.deadline.is_none());
        assert!(context.trace_id.is_none());
    }

    #[tokio::test]
    async fn test_http_handler_fixed_response() {
        let event = LambdaEvent::new(json!({ "rawPath": "/" }), runtime_context());
        let response = http_handler(event).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body.as_deref(), Some("{\"Hello\":\"World!\"}"));
    }

    #[tokio::test]
    async fn test_ws_router_connect() {
        let event = LambdaEvent::new(
            inbound(json!({ "requestContext": { "connectionId": "abc", "eventType": "CONNECT" } })),
            runtime_context(),
        );
        let response = ws_router(event).await.unwrap();
        assert_eq!(
            response.body.as_deref(),
            Some("Connecting... (event_type=CONNECT, connection_id=abc)")
        );
    }

    #[tokio::test]
    async fn test_ws_router_missing_body_fails() {
        let event = LambdaEvent::new(
            inbound(json!({ "requestContext": { "connectionId": "abc", "eventType": "MESSAGE" } })),
            runtime_context(),
        );
        let err = ws_router(event).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: body");
    }

    #[tokio::test]
    async fn test_ws_authorizer_allow_and_deny() {
        let allow = LambdaEvent::new(
            inbound(json!({
                "requestContext": { "connectionId": "abc", "routeKey": "$connect" },
                "headers": { "Authorization": "test" }
            })),
            runtime_context(),
        );
        let policy = ws_authorizer(allow).await.unwrap();
        assert_eq!(policy.effect(), Effect::Allow);
        assert_eq!(policy.connection_id(), Some("abc"));

        let deny = LambdaEvent::new(
            inbound(json!({
                "requestContext": { "connectionId": "abc", "routeKey": "$connect" },
                "headers": { "authorization": "test" }
            })),
            runtime_context(),
        );
        assert_eq!(ws_authorizer(deny).await.unwrap().effect(), Effect::Deny);
    }

    #[tokio::test]
    async fn test_ws_authorizer_missing_headers_fails() {
        let event = LambdaEvent::new(
            inbound(json!({ "requestContext": { "connectionId": "abc", "routeKey": "$connect" } })),
            runtime_context(),
        );
        assert!(ws_authorizer(event).await.is_err());
    }
}
