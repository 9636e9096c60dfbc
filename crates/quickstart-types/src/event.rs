//! Inbound gateway events.
//!
//! These types mirror the JSON an API gateway delivers to a WebSocket or
//! authorizer function. Every field is optional at this level: deciding which
//! fields an entry point requires is the job of the handler that consumes the
//! event, so a missing key surfaces as a named structural error rather than a
//! deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Raw event as delivered by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    /// Gateway-supplied metadata about the connection and route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,

    /// Request headers. `null` and absent are treated alike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,

    /// Message payload (MESSAGE events only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Everything else the gateway sent, kept for logging.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `requestContext` block of an inbound event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Transport-assigned WebSocket connection identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,

    /// Route selected by the gateway (e.g. `$connect`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_key: Option<String>,

    /// Lifecycle discriminator (`CONNECT`, `DISCONNECT`, `MESSAGE`).
    ///
    /// Kept as a raw string so unrecognized values can still be routed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InboundEvent {
    /// Look up a header by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?.get(name).map(String::as_str)
    }
}

/// WebSocket connection lifecycle event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    /// A client is opening a connection.
    Connect,
    /// A client connection closed.
    Disconnect,
    /// A client sent a message over an open connection.
    Message,
}

impl EventType {
    /// Parse the gateway's event type string. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CONNECT" => Some(Self::Connect),
            "DISCONNECT" => Some(Self::Disconnect),
            "MESSAGE" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Disconnect => "DISCONNECT",
            Self::Message => "MESSAGE",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
