//! WebSocket connection lifecycle routing.
//!
//! Dispatches on `requestContext.eventType`. Each invocation stands alone: no
//! connection registry is kept between calls.

use crate::request::LifecycleRequest;
use crate::Result;
use quickstart_types::{EventType, InboundEvent, InvocationContext, ResponseEnvelope};
use tracing::{debug, info, warn};

/// What the router did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleAction {
    Connected { connection_id: String },
    Disconnected { connection_id: String },
    MessageReceived { connection_id: String },
    /// Event type outside CONNECT/DISCONNECT/MESSAGE.
    Ignored { event_type: String },
}

impl LifecycleAction {
    /// Classify a validated request.
    pub fn from_request(request: &LifecycleRequest<'_>) -> Self {
        let connection_id = request.connection_id.to_string();
        match EventType::parse(request.event_type) {
            Some(EventType::Connect) => Self::Connected { connection_id },
            Some(EventType::Disconnect) => Self::Disconnected { connection_id },
            Some(EventType::Message) => Self::MessageReceived { connection_id },
            None => Self::Ignored {
                event_type: request.event_type.to_string(),
            },
        }
    }

    /// Response body describing the action, if any.
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::Connected { connection_id } => Some(format!(
                "Connecting... (event_type=CONNECT, connection_id={connection_id})"
            )),
            Self::Disconnected { connection_id } => Some(format!(
                "Disconnecting... (event_type=DISCONNECT, connection_id={connection_id})"
            )),
            Self::MessageReceived { connection_id } => Some(format!(
                "Hello from event_type=MESSAGE, connection_id={connection_id}"
            )),
            Self::Ignored { .. } => None,
        }
    }

    pub fn into_response(self) -> ResponseEnvelope {
        match self.describe() {
            Some(body) => ResponseEnvelope::ok().with_body(body),
            None => ResponseEnvelope::ok(),
        }
    }
}

/// Route one lifecycle event.
///
/// Always answers 200; an unrecognized event type yields a bodyless 200.
/// Fails when `requestContext`, its `connectionId` or `eventType` is missing,
/// or when a MESSAGE event has no `body`.
pub fn route(event: &InboundEvent, context: &InvocationContext) -> Result<ResponseEnvelope> {
    info!(target: "quickstart::ws", ?event, "Lifecycle event");
    info!(target: "quickstart::ws", ?context, "Lifecycle context");

    let request = LifecycleRequest::from_event(event)?;
    let action = LifecycleAction::from_request(&request);

    match &action {
        LifecycleAction::MessageReceived { connection_id } => debug!(
            target: "quickstart::ws",
            connection_id = connection_id.as_str(),
            len = request.body.map_or(0, str::len),
            "Message body received"
        ),
        LifecycleAction::Ignored { event_type } => warn!(
            target: "quickstart::ws",
            event_type = event_type.as_str(),
            "Unrecognized event type, responding without body"
        ),
        _ => {}
    }

    Ok(action.into_response())
}
