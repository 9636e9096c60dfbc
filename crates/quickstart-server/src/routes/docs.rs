//! OpenAPI document and docs page, mounted only when `enable_openapi` is set.

use crate::routes::{events, health};
use axum::{response::Html, Json};
use quickstart_types::{
    AccessPolicy, ConnectionContext, Effect, PolicyDocument, PolicyStatement, ResponseEnvelope,
};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs/";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quickstart Gateway",
        description = "Health checks and WebSocket gateway event handlers."
    ),
    paths(
        health::container_healthcheck,
        health::alb_healthcheck,
        events::http_event,
        events::ws_event,
        events::ws_authorize
    ),
    components(schemas(
        ResponseEnvelope,
        AccessPolicy,
        PolicyDocument,
        PolicyStatement,
        ConnectionContext,
        Effect
    )),
    tags(
        (name = "Health", description = "Liveness and readiness checks"),
        (name = "Events", description = "Gateway event handlers")
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs/ - Swagger UI pointing at the OpenAPI document.
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <title>Quickstart Gateway - Docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>"##
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/is_ready/", "/events/http", "/events/ws", "/events/ws/authorize"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
        assert_eq!(doc.info.title, "Quickstart Gateway");
    }
}
