//! Router assembly.

use crate::middleware::{cors_layer, proxy_headers};
use crate::routes::{self, docs};
use crate::state::AppState;
use anyhow::Result;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router with all middleware applied.
///
/// Fails only if the CORS settings hold an invalid origin, method or header.
pub fn build_router(state: Arc<AppState>) -> Result<Router> {
    let mut app = Router::new()
        // Health checks
        .route("/", get(routes::health::container_healthcheck))
        .route("/is_ready/", get(routes::health::alb_healthcheck))
        .route("/is_ready", get(routes::health::redirect_is_ready))
        // Gateway events
        .route("/events/http", post(routes::events::http_event))
        .route("/events/ws", post(routes::events::ws_event))
        .route("/events/ws/authorize", post(routes::events::ws_authorize));

    if state.config.enable_openapi {
        app = app
            .route(docs::OPENAPI_PATH, get(docs::openapi_json))
            .route(docs::DOCS_PATH, get(docs::swagger_ui));
    }

    let app = app
        .layer(cors_layer(&state.config.cors)?)
        .layer(from_fn_with_state(state.clone(), proxy_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
