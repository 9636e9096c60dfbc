//! Generic HTTP event handler.

use quickstart_types::{InvocationContext, ResponseEnvelope};
use serde_json::{json, Value};
use tracing::info;

/// Log the event and answer with a fixed `{"Hello":"World!"}` JSON response.
///
/// The event is not inspected, so this cannot fail.
pub fn handle(event: &Value, context: &InvocationContext) -> ResponseEnvelope {
    info!(target: "quickstart::http", %event, "HTTP event");
    info!(target: "quickstart::http", ?context, "HTTP context");

    ResponseEnvelope::ok()
        .base64_encoded(false)
        .with_header("Content-Type", "application/json")
        .with_body(json!({ "Hello": "World!" }).to_string())
}
