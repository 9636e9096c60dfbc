//! CORS layer built from `[cors]` settings.

use crate::config::{CorsConfig, WILDCARD};
use anyhow::{anyhow, Result};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

/// Build the CORS layer.
///
/// Credentialed responses may not use `*`, so when credentials are allowed a
/// wildcard setting mirrors the request's origin, method or headers instead.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let mirror = config.allow_credentials;

    let origin = if is_wildcard(&config.allow_origins) {
        if mirror { AllowOrigin::mirror_request() } else { Any.into() }
    } else {
        let origins = config
            .allow_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| anyhow!("Invalid CORS origin: '{}'", o))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    let methods = if is_wildcard(&config.allow_methods) {
        if mirror { AllowMethods::mirror_request() } else { Any.into() }
    } else {
        let methods = config
            .allow_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.to_uppercase().as_bytes())
                    .map_err(|_| anyhow!("Invalid CORS method: '{}'", m))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowMethods::list(methods)
    };

    let headers = if is_wildcard(&config.allow_headers) {
        if mirror { AllowHeaders::mirror_request() } else { Any.into() }
    } else {
        let headers = config
            .allow_headers
            .iter()
            .map(|h| {
                HeaderName::from_bytes(h.as_bytes())
                    .map_err(|_| anyhow!("Invalid CORS header: '{}'", h))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowHeaders::list(headers)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.allow_credentials))
}
