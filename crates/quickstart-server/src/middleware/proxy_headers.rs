//! Client address resolution behind trusted proxies.
//!
//! When the TCP peer is listed in `trusted_hosts` (or the list holds `*`),
//! the client address comes from the first `X-Forwarded-For` entry and the
//! scheme from `X-Forwarded-Proto`. The result is attached to the request as
//! a [`ClientAddr`] extension.

use crate::config::Config;
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Originating client as seen through trusted proxies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr {
    pub host: String,
    pub scheme: String,
}

impl fmt::Display for ClientAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Work out the client address for one request.
///
/// `peer` is the TCP peer IP, unknown when the router is driven without a
/// socket (in-process calls); an unknown peer is trusted only by `*`.
pub fn resolve_client(config: &Config, peer: Option<&str>, headers: &HeaderMap) -> Option<ClientAddr> {
    let trusted = match peer {
        Some(host) => config.is_trusted_host(host),
        None => config.is_trusted_host(crate::config::WILDCARD),
    };

    let mut host = peer.map(String::from);
    let mut scheme = "http".to_string();

    if trusted {
        if let Some(forwarded) = header_str(headers, X_FORWARDED_FOR) {
            if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
                host = Some(first.to_string());
            }
        }
        if let Some(proto) = header_str(headers, X_FORWARDED_PROTO) {
            scheme = proto.to_lowercase();
        }
    }

    host.map(|host| ClientAddr { host, scheme })
}

/// Middleware inserting [`ClientAddr`] into request extensions.
pub async fn proxy_headers(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    if let Some(client) = resolve_client(&state.config, peer.as_deref(), request.headers()) {
        request.extensions_mut().insert(client);
    }

    next.run(request).await
}
