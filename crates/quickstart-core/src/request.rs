//! Validation of inbound events into per-entry-point requests.
//!
//! Each entry point borrows the fields it needs out of an [`InboundEvent`]
//! and fails fast with [`QuickstartError::MissingField`] naming the first
//! absent key.

use crate::{QuickstartError, Result};
use quickstart_types::{EventType, InboundEvent, RequestContext};

/// Decode a raw event body. The body must be a JSON object.
pub fn parse_event(raw: &[u8]) -> Result<InboundEvent> {
    Ok(serde_json::from_slice(raw)?)
}

fn request_context(event: &InboundEvent) -> Result<&RequestContext> {
    event
        .request_context
        .as_ref()
        .ok_or(QuickstartError::MissingField("requestContext"))
}

fn connection_id(ctx: &RequestContext) -> Result<&str> {
    ctx.connection_id
        .as_deref()
        .ok_or(QuickstartError::MissingField("requestContext.connectionId"))
}

/// Fields the connection authorizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizeRequest<'a> {
    pub connection_id: &'a str,
    pub route_key: &'a str,
    pub authorization: Option<&'a str>,
}

impl<'a> AuthorizeRequest<'a> {
    /// `requestContext.connectionId`, `requestContext.routeKey` and `headers`
    /// are required; the `Authorization` header itself is optional.
    pub fn from_event(event: &'a InboundEvent) -> Result<Self> {
        let ctx = request_context(event)?;
        let connection_id = connection_id(ctx)?;
        let route_key = ctx
            .route_key
            .as_deref()
            .ok_or(QuickstartError::MissingField("requestContext.routeKey"))?;
        if event.headers.is_none() {
            return Err(QuickstartError::MissingField("headers"));
        }

        Ok(Self {
            connection_id,
            route_key,
            authorization: event.header("Authorization"),
        })
    }
}

/// Fields the lifecycle router reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleRequest<'a> {
    pub connection_id: &'a str,
    /// Raw discriminator; may hold a value outside the known event types.
    pub event_type: &'a str,
    pub body: Option<&'a str>,
}

impl<'a> LifecycleRequest<'a> {
    /// `requestContext.connectionId` and `requestContext.eventType` are
    /// required, plus `body` when the event type is `MESSAGE`.
    pub fn from_event(event: &'a InboundEvent) -> Result<Self> {
        let ctx = request_context(event)?;
        let connection_id = connection_id(ctx)?;
        let event_type = ctx
            .event_type
            .as_deref()
            .ok_or(QuickstartError::MissingField("requestContext.eventType"))?;
        let body = event.body.as_deref();
        if body.is_none() && EventType::parse(event_type) == Some(EventType::Message) {
            return Err(QuickstartError::MissingField("body"));
        }

        Ok(Self {
            connection_id,
            event_type,
            body,
        })
    }
}
