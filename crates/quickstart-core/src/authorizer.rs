//! WebSocket connection authorizer.
//!
//! Turns a connection request into an Allow/Deny [`AccessPolicy`]. The
//! decision itself is delegated to a [`ConnectionRule`]; the shipped
//! [`TokenRule`] compares the `Authorization` header against a fixed token
//! and only admits the connect route. It performs no credential
//! verification.

use crate::request::AuthorizeRequest;
use crate::Result;
use quickstart_types::{AccessPolicy, InboundEvent, InvocationContext};
use tracing::{debug, info};

/// Default token accepted by [`TokenRule`].
pub const DEFAULT_TOKEN: &str = "test";
/// Route on which connections may be authorized.
pub const CONNECT_ROUTE: &str = "$connect";

/// Decides whether a connection request is admitted.
pub trait ConnectionRule: Send + Sync {
    fn permits(&self, authorization: Option<&str>, route_key: &str) -> bool;
}

/// Static token + route comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRule {
    token: String,
    route_key: String,
}

impl TokenRule {
    pub fn new(token: impl Into<String>, route_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            route_key: route_key.into(),
        }
    }
}

impl Default for TokenRule {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN, CONNECT_ROUTE)
    }
}

impl ConnectionRule for TokenRule {
    fn permits(&self, authorization: Option<&str>, route_key: &str) -> bool {
        authorization == Some(self.token.as_str()) && route_key == self.route_key
    }
}

/// Connection authorizer entry point.
pub struct Authorizer<R = TokenRule> {
    rule: R,
}

impl Default for Authorizer<TokenRule> {
    fn default() -> Self {
        Self::new(TokenRule::default())
    }
}

impl<R: ConnectionRule> Authorizer<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Evaluate a connection request.
    ///
    /// Fails only when the event lacks `requestContext`, its
    /// `connectionId`/`routeKey`, or `headers`.
    pub fn authorize(&self, event: &InboundEvent, context: &InvocationContext) -> Result<AccessPolicy> {
        debug!(target: "quickstart::auth", ?event, "Authorizer event");
        debug!(target: "quickstart::auth", ?context, "Authorizer context");

        let request = AuthorizeRequest::from_event(event)?;

        let policy = if self.rule.permits(request.authorization, request.route_key) {
            info!(
                target: "quickstart::auth",
                connection_id = request.connection_id,
                "Connection allowed"
            );
            AccessPolicy::allow(request.connection_id)
        } else {
            info!(
                target: "quickstart::auth",
                route_key = request.route_key,
                has_token = request.authorization.is_some(),
                "Connection denied"
            );
            AccessPolicy::deny()
        };

        debug!(target: "quickstart::auth", ?policy, "Authorizer policy");
        Ok(policy)
    }
}
