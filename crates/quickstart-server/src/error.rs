//! Mapping of handler failures onto HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use quickstart_core::QuickstartError;

/// A handler failure as seen by the gateway.
///
/// Always a 500 with a plain-text body: the gateway treats it as an
/// invocation error rather than a handler response.
#[derive(Debug)]
pub struct ApiError {
    error: QuickstartError,
    request_id: String,
    expose_detail: bool,
}

impl ApiError {
    /// `expose_detail` puts the error text in the body (debug mode).
    pub fn new(error: QuickstartError, request_id: impl Into<String>, expose_detail: bool) -> Self {
        Self {
            error,
            request_id: request_id.into(),
            expose_detail,
        }
    }

    pub fn error(&self) -> &QuickstartError {
        &self.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            target: "quickstart::api",
            request_id = %self.request_id,
            "Invocation failed: {}",
            self.error
        );

        let body = if self.expose_detail {
            self.error.to_string()
        } else {
            "Internal Server Error".to_string()
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
