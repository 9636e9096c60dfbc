//! Health check routes.

use crate::middleware::ClientAddr;
use axum::{
    response::Redirect,
    Extension, Json,
};
use quickstart_types::JsendEnvelope;
use tracing::debug;

const HEALTH_MESSAGE: &str = "Health check.";

fn healthy() -> Json<JsendEnvelope> {
    Json(JsendEnvelope::success(None, HEALTH_MESSAGE))
}

fn client_label(client: &Option<Extension<ClientAddr>>) -> String {
    client
        .as_ref()
        .map(|Extension(c)| c.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Container health check.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "JSEND success envelope"))
)]
pub async fn container_healthcheck(client: Option<Extension<ClientAddr>>) -> Json<JsendEnvelope> {
    debug!(target: "quickstart::health", client = %client_label(&client), "Container health check.");
    healthy()
}

/// Load balancer readiness check.
#[utoipa::path(
    get,
    path = "/is_ready/",
    tag = "Health",
    responses((status = 200, description = "JSEND success envelope"))
)]
pub async fn alb_healthcheck(client: Option<Extension<ClientAddr>>) -> Json<JsendEnvelope> {
    debug!(target: "quickstart::health", client = %client_label(&client), "ALB health check.");
    healthy()
}

/// GET /is_ready - Redirect to the canonical slash-terminated path.
pub async fn redirect_is_ready() -> Redirect {
    Redirect::temporary("/is_ready/")
}
